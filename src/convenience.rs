//! Convenience functions combining hashing with encoding in a single call.

use crate::{Alphabet, EncodeOptions, Error, HashInput, TagHasher, encode};

/// Result of a hash + encode operation.
#[derive(Debug, Clone)]
pub struct HashEncodeResult {
    /// The rendered symbols (and header, if requested)
    pub encoded: Vec<u8>,
    /// Number of symbols in the alphabet used
    pub base: usize,
    /// Tag length in bytes that was encoded
    pub tag_length: usize,
}

impl HashEncodeResult {
    /// Returns the rendered output as text, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.encoded).into_owned()
    }
}

/// Hash `input` with `hasher` and render the tag in `alphabet`.
///
/// The alphabet has already been validated by construction, so a bad alphabet
/// never costs a hash computation.
///
/// # Example
/// ```
/// use tagbase::{Alphabet, Argon2Params, Argon2id, EncodeOptions, HashInput};
/// use tagbase::convenience::hash_encode;
///
/// let alphabet = Alphabet::parse(b"0\n1\n2\n3\n4\n5\n6\n7\n8\n9").unwrap();
/// let hasher = Argon2id::new(Argon2Params {
///     tag_length: 16,
///     iterations: 1,
///     parallelism: 1,
///     memory_kib: 64,
/// });
/// let input = HashInput {
///     message: b"hello".to_vec(),
///     nonce: b"somesalt".to_vec(),
///     ..Default::default()
/// };
/// let result = hash_encode(&input, &hasher, &alphabet, &EncodeOptions::default()).unwrap();
/// assert!(result.encoded.iter().all(u8::is_ascii_digit));
/// ```
pub fn hash_encode<H: TagHasher>(
    input: &HashInput,
    hasher: &H,
    alphabet: &Alphabet<'_>,
    options: &EncodeOptions,
) -> Result<HashEncodeResult, Error> {
    let tag = hasher.hash(input)?;
    let tag_length = tag.len();
    let encoded = encode(tag, alphabet, options)?;

    Ok(HashEncodeResult {
        encoded,
        base: alphabet.base(),
        tag_length,
    })
}
