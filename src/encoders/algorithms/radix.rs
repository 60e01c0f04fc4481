//! Change-of-radix conversion of a big-endian digest into alphabet symbols.
//!
//! The digest is treated as one unsigned integer and repeatedly divided by the
//! base with schoolbook long division, one byte at a time. Each pass yields one
//! digit (the remainder) and shrinks the live part of the buffer once its
//! leading quotient bytes become zero, so later passes touch fewer bytes.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::core::alphabet::Alphabet;

pub use super::errors::{DecodeError, EncodeError};

/// Rendering options for [`encode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Prefix the output with a `Found N characters` line.
    pub header: bool,
}

impl EncodeOptions {
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

/// Text of the optional header line for an alphabet of `base` symbols.
pub fn header_line(base: usize) -> String {
    format!("Found {base} characters\n")
}

/// Upper bound on the number of digits a `bit_len`-bit value has in `base`.
///
/// Integer-only estimate: `width` is the bit length of `base`, so
/// `width - 1 = floor(log2 base) <= log2 base` and dividing by it can only
/// over-count. Always at least `ceil(bit_len / log2 base)`.
pub fn capacity(bit_len: u64, base: usize) -> usize {
    debug_assert!(base >= 2, "capacity needs base >= 2");
    let width = usize::BITS - base.max(2).leading_zeros();
    let per_digit = u64::from(width - 1);
    let digits = bit_len.saturating_add(1).div_ceil(per_digit).saturating_add(1);
    usize::try_from(digits).unwrap_or(usize::MAX)
}

/// A digest being consumed by repeated division.
///
/// Owns the buffer: every call to [`Dividend::divide`] overwrites it with the
/// quotient, so the original digest is gone once division starts.
#[derive(Debug)]
pub struct Dividend {
    bytes: Vec<u8>,
    len: usize,
}

impl Dividend {
    pub fn new(digest: Vec<u8>) -> Self {
        let len = digest.len();
        Self { bytes: digest, len }
    }

    /// Number of leading bytes still holding the value.
    pub fn effective_len(&self) -> usize {
        self.len
    }

    /// True once a division produced a zero quotient (or the digest was empty).
    pub fn is_exhausted(&self) -> bool {
        self.len == 0
    }

    /// Live bytes of the current quotient, most significant first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Divides the value by `divisor` in place and returns the remainder.
    ///
    /// Zero quotient bytes at the front are not written back; each one drops
    /// the effective length by one. The effective length never grows.
    pub fn divide(&mut self, divisor: u32) -> u32 {
        debug_assert!(divisor >= 2);
        let divisor = u64::from(divisor);
        let mut acc: u64 = 0;
        let mut write = 0;

        for read in 0..self.len {
            acc = (acc << 8) | u64::from(self.bytes[read]);
            // acc < divisor * 256 here, so the quotient fits a byte
            let quotient = (acc / divisor) as u8;
            acc %= divisor;

            if quotient == 0 && write == 0 {
                self.len -= 1;
            } else {
                self.bytes[write] = quotient;
                write += 1;
            }
        }

        tracing::trace!(remainder = acc, effective_len = self.len, "division pass");
        acc as u32
    }
}

/// Converts `digest` to digits of `base`, least significant digit first.
///
/// An all-zero digest yields a single `0` digit; an empty digest yields none.
pub fn digits(digest: Vec<u8>, base: u32) -> Result<Vec<u32>, EncodeError> {
    let bit_len = (digest.len() as u64) << 3;
    let bound = capacity(bit_len, base as usize);

    let mut digits = Vec::new();
    digits
        .try_reserve_exact(bound)
        .map_err(EncodeError::allocation("digit buffer"))?;

    let mut dividend = Dividend::new(digest);
    while !dividend.is_exhausted() {
        digits.push(dividend.divide(base));
    }

    debug_assert!(digits.len() <= bound);
    Ok(digits)
}

/// Renders `digest` as symbols of `alphabet`, most significant digit first.
///
/// Takes the digest by value since the division destroys it.
pub fn encode(
    digest: Vec<u8>,
    alphabet: &Alphabet<'_>,
    options: &EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
    let base = u32::try_from(alphabet.base()).map_err(|_| EncodeError::AlphabetTooLarge {
        found: alphabet.base(),
        max: u32::MAX as usize,
    })?;
    let bit_len = (digest.len() as u64) << 3;
    let bound = capacity(bit_len, alphabet.base());

    let header = if options.header {
        header_line(alphabet.base())
    } else {
        String::new()
    };
    let size = bound
        .checked_mul(alphabet.max_symbol_len())
        .and_then(|n| n.checked_add(header.len()))
        .ok_or(EncodeError::AllocationFailure {
            what: "output buffer",
        })?;

    let mut output = Vec::new();
    output
        .try_reserve_exact(size)
        .map_err(EncodeError::allocation("output buffer"))?;

    let digits = digits(digest, base)?;
    tracing::debug!(base, bit_len, bound, digits = digits.len(), "encoded digest");

    output.extend_from_slice(header.as_bytes());
    for &digit in digits.iter().rev() {
        output.extend_from_slice(&alphabet[digit as usize]);
    }
    Ok(output)
}

/// Like [`encode`], but requires the rendered output to be UTF-8.
pub fn encode_to_string(
    digest: Vec<u8>,
    alphabet: &Alphabet<'_>,
    options: &EncodeOptions,
) -> Result<String, EncodeError> {
    let bytes = encode(digest, alphabet, options)?;
    String::from_utf8(bytes).map_err(|_| EncodeError::NonUtf8Output)
}

/// Parses rendered symbols back into a `tag_length`-byte big-endian digest.
///
/// Symbols are matched greedily, longest first, so the result is only
/// unambiguous when no symbol sequence can be read two ways. Duplicate
/// symbols decode to their lowest index. The header line is not accepted.
pub fn decode(
    encoded: &[u8],
    alphabet: &Alphabet<'_>,
    tag_length: usize,
) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let index = alphabet.lookup();
    let base = BigUint::from(alphabet.base());
    let mut num = BigUint::zero();

    let mut position = 0;
    while position < encoded.len() {
        let rest = &encoded[position..];
        let longest = alphabet.max_symbol_len().min(rest.len());
        let (digit, len) = (1..=longest)
            .rev()
            .find_map(|len| index.get(&rest[..len]).map(|&digit| (digit, len)))
            .ok_or(DecodeError::InvalidSymbol { position })?;

        num *= &base;
        num += digit;
        position += len;
    }

    let bytes = if num.is_zero() {
        Vec::new()
    } else {
        num.to_bytes_be()
    };
    if bytes.len() > tag_length {
        return Err(DecodeError::Overflow {
            needed: bytes.len(),
            tag_length,
        });
    }

    let mut result = Vec::with_capacity(tag_length);
    result.resize(tag_length - bytes.len(), 0u8);
    result.extend_from_slice(&bytes);
    Ok(result)
}
