use crate::cli::{
    args::InspectArgs,
    config::{alphabet_origin, load_alphabet},
    global::GlobalArgs,
};
use tagbase::{Alphabet, BUILTIN_NAMES, Settings, builtin, capacity};

pub fn handle(
    args: InspectArgs,
    _global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.list {
        println!("Built-in alphabets:\n");
        for name in BUILTIN_NAMES {
            let Some(source) = builtin(name) else {
                continue;
            };
            let alphabet = Alphabet::parse(&source)?;
            let preview: String = alphabet
                .symbols()
                .take(20)
                .map(String::from_utf8_lossy)
                .collect();
            let suffix = if alphabet.base() > 20 { "..." } else { "" };
            println!("  {:<8} base-{:<3} {}{}", name, alphabet.base(), preview, suffix);
        }
        return Ok(());
    }

    let origin = alphabet_origin(&args.alphabet, settings);
    let alphabet = load_alphabet(&origin)?;
    let tag_length = args.tag_length.unwrap_or(settings.argon2.tag_length);
    let bound = capacity(u64::from(tag_length) << 3, alphabet.base());

    println!("alphabet:         {origin}");
    println!("base:             {}", alphabet.base());
    println!("max symbol bytes: {}", alphabet.max_symbol_len());
    println!("digit bound:      {bound} ({tag_length}-byte tag)");
    Ok(())
}
