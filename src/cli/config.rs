use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tagbase::{Alphabet, BUILTIN_NAMES, Error, Settings, builtin};

use crate::cli::args::AlphabetArgs;

/// Where an alphabet was loaded from, for log and report lines.
#[derive(Debug, Clone)]
pub enum AlphabetOrigin {
    Builtin(String),
    File(PathBuf),
}

impl std::fmt::Display for AlphabetOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphabetOrigin::Builtin(name) => write!(f, "built-in {name}"),
            AlphabetOrigin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Picks the alphabet source: `--builtin`, then `--alphabet`, then the configured file.
pub fn alphabet_origin(args: &AlphabetArgs, settings: &Settings) -> AlphabetOrigin {
    if let Some(name) = &args.builtin {
        return AlphabetOrigin::Builtin(name.clone());
    }
    match &args.alphabet {
        Some(path) => AlphabetOrigin::File(path.clone()),
        None => AlphabetOrigin::File(Settings::resolve(&settings.files.alphabet)),
    }
}

/// Loads and parses an alphabet.
///
/// A missing file whose stem names a built-in alphabet (such as the default
/// `base94.txt`) falls back to that built-in.
pub fn load_alphabet(origin: &AlphabetOrigin) -> Result<Alphabet<'static>, Box<dyn std::error::Error>> {
    let source = match origin {
        AlphabetOrigin::Builtin(name) => builtin(name).ok_or_else(|| {
            format!(
                "unknown built-in alphabet '{name}' (available: {})",
                BUILTIN_NAMES.join(", ")
            )
        })?,
        AlphabetOrigin::File(path) => match builtin_fallback(path) {
            Some(source) => {
                tracing::info!(path = %path.display(), "alphabet file not found, using built-in");
                source
            }
            None => read_file(path)?,
        },
    };
    Ok(Alphabet::parse_owned(source)?)
}

fn builtin_fallback(path: &Path) -> Option<Vec<u8>> {
    if path.exists() {
        return None;
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(builtin)
}

/// Reads a whole file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>, Error> {
    let bytes = fs::read(path).map_err(Error::io(path))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");
    Ok(bytes)
}

/// Reads a file, or all of stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, Error> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .map_err(Error::io("<stdin>"))?;
            Ok(buffer)
        }
    }
}

/// Writes rendered output to a file, or to stdout (followed by a newline)
/// when no path or `-` is given.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), Error> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::write(path, bytes).map_err(Error::io(path))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote output");
            Ok(())
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.write_all(b"\n"))
                .and_then(|()| stdout.flush())
                .map_err(Error::io("<stdout>"))
        }
    }
}
