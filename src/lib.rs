//! Render fixed-length digests in arbitrary, user-supplied alphabets.
//!
//! The digest is read as a big-endian unsigned integer and re-expressed in a
//! base equal to the alphabet size. Symbols are CR/LF-delimited tokens and may
//! be any number of bytes long.
//!
//! ```
//! use tagbase::{Alphabet, EncodeOptions, encode};
//!
//! let alphabet = Alphabet::parse(b"lo\r\nhi\r\n").unwrap();
//! let rendered = encode(vec![0x05], &alphabet, &EncodeOptions::default()).unwrap();
//! assert_eq!(rendered, b"hilohi");
//! ```

mod core;
mod encoders;
mod features;

pub mod convenience;
pub mod prelude;

pub use crate::core::alphabet::{Alphabet, BUILTIN_NAMES, MAX_BASE, builtin};
pub use crate::core::config::{FileSettings, HashSettings, OutputSettings, Settings};
pub use crate::encoders::algorithms::errors::{DecodeError, EncodeError, Error, HashError};
pub use crate::encoders::algorithms::radix::{
    Dividend, EncodeOptions, capacity, decode, digits, encode, encode_to_string, header_line,
};
pub use crate::features::hashing::{Argon2Params, Argon2id, HashInput, TagHasher};
