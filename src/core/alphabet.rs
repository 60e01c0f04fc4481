use std::borrow::Cow;
use std::collections::HashMap;
use std::ops::{Index, Range};

use crate::encoders::algorithms::errors::EncodeError;

/// Largest base the radix divider accepts (the divisor is a `u32`).
pub const MAX_BASE: usize = u32::MAX as usize;

/// An ordered set of symbols used as the digits of the target base.
///
/// Symbols are CR/LF-delimited tokens of the source buffer. Each symbol is
/// stored as a byte span into that buffer, which is either borrowed
/// ([`Alphabet::parse`]) or owned ([`Alphabet::parse_owned`]). Symbol content
/// need not be unique; the position of a symbol is its digit value.
#[derive(Debug, Clone)]
pub struct Alphabet<'a> {
    source: Cow<'a, [u8]>,
    symbols: Vec<Range<usize>>,
    max_symbol_len: usize,
}

impl<'a> Alphabet<'a> {
    /// Tokenizes `source` without copying it.
    ///
    /// Any run of `\r` / `\n` bytes separates tokens, empty tokens are
    /// skipped and the final token ends at end-of-buffer.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::AlphabetTooSmall`] when fewer than two symbols are found
    /// - [`EncodeError::AlphabetTooLarge`] when the base exceeds [`MAX_BASE`]
    /// - [`EncodeError::AllocationFailure`] when the symbol table cannot be reserved
    pub fn parse(source: &'a [u8]) -> Result<Self, EncodeError> {
        Self::from_cow(Cow::Borrowed(source))
    }

    fn from_cow(source: Cow<'a, [u8]>) -> Result<Self, EncodeError> {
        let (symbols, max_symbol_len) = tokenize(&source)?;

        if symbols.len() < 2 {
            return Err(EncodeError::AlphabetTooSmall {
                found: symbols.len(),
            });
        }
        if symbols.len() > MAX_BASE {
            return Err(EncodeError::AlphabetTooLarge {
                found: symbols.len(),
                max: MAX_BASE,
            });
        }

        tracing::debug!(base = symbols.len(), max_symbol_len, "parsed alphabet");
        Ok(Alphabet {
            source,
            symbols,
            max_symbol_len,
        })
    }

    /// Returns the base (radix), i.e. the number of symbols.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Length in bytes of the longest symbol.
    pub fn max_symbol_len(&self) -> usize {
        self.max_symbol_len
    }

    /// Returns the bytes of the symbol for `digit`, or `None` if out of range.
    pub fn symbol(&self, digit: usize) -> Option<&[u8]> {
        self.symbols
            .get(digit)
            .map(|span| &self.source[span.clone()])
    }

    pub fn symbols(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.symbols.iter().map(|span| &self.source[span.clone()])
    }

    /// Builds a lookup from symbol content to digit value.
    ///
    /// When several symbols share the same content the lowest index wins.
    pub fn lookup(&self) -> HashMap<&[u8], usize> {
        let mut map = HashMap::with_capacity(self.symbols.len());
        for (digit, symbol) in self.symbols().enumerate() {
            map.entry(symbol).or_insert(digit);
        }
        map
    }

    /// Returns the digit value of `symbol`, the lowest index when content repeats.
    pub fn index_of(&self, symbol: &[u8]) -> Option<usize> {
        self.symbols().position(|candidate| candidate == symbol)
    }

    /// Detaches the alphabet from the borrowed source by copying it.
    pub fn into_owned(self) -> Alphabet<'static> {
        Alphabet {
            source: Cow::Owned(self.source.into_owned()),
            symbols: self.symbols,
            max_symbol_len: self.max_symbol_len,
        }
    }
}

impl Index<usize> for Alphabet<'_> {
    type Output = [u8];

    fn index(&self, digit: usize) -> &[u8] {
        &self.source[self.symbols[digit].clone()]
    }
}

impl Alphabet<'static> {
    /// Tokenizes `source`, taking ownership of the buffer.
    ///
    /// See [`Alphabet::parse`] for the tokenization rules and errors.
    pub fn parse_owned(source: Vec<u8>) -> Result<Self, EncodeError> {
        Self::from_cow(Cow::Owned(source))
    }
}

fn is_delimiter(byte: u8) -> bool {
    byte == b'\r' || byte == b'\n'
}

/// Splits `source` into symbol spans and reports the longest span.
fn tokenize(source: &[u8]) -> Result<(Vec<Range<usize>>, usize), EncodeError> {
    let mut symbols = Vec::new();
    symbols
        .try_reserve_exact(count_tokens(source))
        .map_err(EncodeError::allocation("symbol table"))?;

    let mut max_len = 0;
    let mut start = None;
    for (i, &byte) in source.iter().enumerate() {
        match (is_delimiter(byte), start) {
            (true, Some(s)) => {
                max_len = max_len.max(i - s);
                symbols.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        max_len = max_len.max(source.len() - s);
        symbols.push(s..source.len());
    }

    Ok((symbols, max_len))
}

/// Counts tokens without recording them: each non-delimiter byte that starts
/// the buffer or follows a delimiter opens one.
fn count_tokens(source: &[u8]) -> usize {
    let mut previous_is_delimiter = true;
    let mut count = 0;
    for &byte in source {
        let delimiter = is_delimiter(byte);
        if previous_is_delimiter && !delimiter {
            count += 1;
        }
        previous_is_delimiter = delimiter;
    }
    count
}

/// Names of the alphabets compiled into the crate.
pub const BUILTIN_NAMES: &[&str] = &[
    "base94", "base64", "base58", "base32", "base16", "base10", "base2",
];

const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const BASE16: &str = "0123456789abcdef";
const BASE10: &str = "0123456789";
const BASE2: &str = "01";

/// Returns the newline-delimited source of a built-in alphabet.
///
/// `base94` is every printable ASCII character from `!` to `~`.
pub fn builtin(name: &str) -> Option<Vec<u8>> {
    let chars: Vec<u8> = match name {
        "base94" => (b'!'..=b'~').collect(),
        "base64" => BASE64.bytes().collect(),
        "base58" => BASE58.bytes().collect(),
        "base32" => BASE32.bytes().collect(),
        "base16" => BASE16.bytes().collect(),
        "base10" => BASE10.bytes().collect(),
        "base2" => BASE2.bytes().collect(),
        _ => return None,
    };

    let mut source = Vec::with_capacity(chars.len() * 2);
    for c in chars {
        source.push(c);
        source.push(b'\n');
    }
    Some(source)
}
