use crate::cli::{
    args::DecodeArgs,
    config::{alphabet_origin, load_alphabet, read_input},
    global::GlobalArgs,
};
use std::io::{self, Write};
use tagbase::{Settings, decode};

pub fn handle(
    args: DecodeArgs,
    _global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = load_alphabet(&alphabet_origin(&args.alphabet, settings))?;
    let input = read_input(args.file.as_deref())?;

    let mut encoded = input.as_slice();
    if args.header {
        encoded = match encoded.iter().position(|&b| b == b'\n') {
            Some(end) => &encoded[end + 1..],
            None => return Err("expected a header line before the symbols".into()),
        };
    }
    while let [rest @ .., b'\r' | b'\n'] = encoded {
        encoded = rest;
    }

    let tag_length = args.tag_length.unwrap_or(settings.argon2.tag_length) as usize;
    let digest = decode(encoded, &alphabet, tag_length)?;

    if args.raw {
        io::stdout().write_all(&digest)?;
    } else {
        println!("{}", hex::encode(&digest));
    }
    Ok(())
}
