use crate::cli::{
    args::EncodeArgs,
    config::{alphabet_origin, load_alphabet, read_input, write_output},
    global::GlobalArgs,
};
use tagbase::{EncodeOptions, Settings, encode};

pub fn handle(
    args: EncodeArgs,
    _global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    // Parse the alphabet before touching the digest
    let alphabet = load_alphabet(&alphabet_origin(&args.alphabet, settings))?;

    let input = read_input(args.file.as_deref())?;
    let digest = if args.hex {
        let text = String::from_utf8(input).map_err(|_| "hex input must be valid UTF-8")?;
        hex::decode(text.trim()).map_err(|e| format!("invalid hex input: {e}"))?
    } else {
        input
    };

    let options = EncodeOptions::default().with_header(args.header.resolve(settings.output.header));
    let rendered = encode(digest, &alphabet, &options)?;
    write_output(args.output.as_deref(), &rendered)?;
    Ok(())
}
