//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use tagbase::prelude::*;
//!
//! let alphabet = Alphabet::parse(b"0\n1").unwrap();
//! let rendered = encode_to_string(vec![0x05], &alphabet, &EncodeOptions::default()).unwrap();
//! assert_eq!(rendered, "101");
//! ```

pub use crate::{
    Alphabet,
    // Hashing
    Argon2Params,
    Argon2id,
    DecodeError,
    EncodeError,
    EncodeOptions,
    Error,
    HashInput,
    Settings,
    TagHasher,
    convenience::{HashEncodeResult, hash_encode},
    // Core encoding/decoding
    decode,
    encode,
    encode_to_string,
};
