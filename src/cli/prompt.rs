use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Line-oriented prompts for file names and numbers.
///
/// An empty answer (or end of input) selects the default, as does a number
/// that is zero or does not parse.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn path(&mut self, prompt: &str, default: &str) -> io::Result<PathBuf> {
        let answer = self.ask(prompt)?;
        if answer.is_empty() {
            writeln!(self.output, "Nothing entered, defaulting to \"{default}\"")?;
            return Ok(PathBuf::from(default));
        }
        Ok(PathBuf::from(answer))
    }

    pub fn number(&mut self, prompt: &str, default: u32) -> io::Result<u32> {
        let answer = self.ask(prompt)?;
        match parse_number(&answer) {
            Some(n) => Ok(n),
            None => {
                writeln!(self.output, "Invalid entry, choosing default value")?;
                Ok(default)
            }
        }
    }
}

/// Parses a leading unsigned number with C-style radix prefixes
/// (`0x` hex, leading `0` octal, otherwise decimal). Trailing junk is
/// ignored; zero, overflow and empty input give `None`.
fn parse_number(text: &str) -> Option<u32> {
    let text = text.trim();
    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        (hex, 16)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    match u32::from_str_radix(&digits[..end], radix) {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}
