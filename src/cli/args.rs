use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Where the alphabet comes from
#[derive(Args, Debug, Clone, Default)]
pub struct AlphabetArgs {
    /// Alphabet file: one symbol per line, CR/LF delimited
    #[arg(short = 'a', long, value_name = "FILE", conflicts_with = "builtin")]
    pub alphabet: Option<PathBuf>,

    /// Use a built-in alphabet instead of a file (see `tagbase alphabet --list`)
    #[arg(short = 'b', long, value_name = "NAME")]
    pub builtin: Option<String>,
}

/// Header framing switches shared by the rendering commands
#[derive(Args, Debug, Clone, Default)]
pub struct HeaderArgs {
    /// Prefix output with a "Found N characters" line
    #[arg(long, conflicts_with = "no_header")]
    pub header: bool,

    /// Never prefix output with the header line
    #[arg(long)]
    pub no_header: bool,
}

impl HeaderArgs {
    /// Command line wins over the configured default.
    pub fn resolve(&self, configured: bool) -> bool {
        if self.header {
            true
        } else if self.no_header {
            false
        } else {
            configured
        }
    }
}

/// Arguments for hashing files with Argon2id and rendering the tag
#[derive(Args, Debug, Default)]
pub struct HashArgs {
    /// Message file
    #[arg(short = 'm', long, value_name = "FILE")]
    pub message: Option<PathBuf>,

    /// Nonce (salt) file, at least 8 bytes
    #[arg(short = 'n', long, value_name = "FILE")]
    pub nonce: Option<PathBuf>,

    /// Secret value (pepper) file
    #[arg(short = 's', long, value_name = "FILE")]
    pub secret: Option<PathBuf>,

    /// Associated data file
    #[arg(short = 'd', long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// Tag length in bytes
    #[arg(short = 't', long)]
    pub tag_length: Option<u32>,

    /// Number of iterations
    #[arg(short = 'i', long)]
    pub iterations: Option<u32>,

    /// Degree of parallelism
    #[arg(short = 'p', long)]
    pub parallelism: Option<u32>,

    /// Memory size in KiB (default: 4096 * parallelism)
    #[arg(short = 'M', long = "memory")]
    pub memory_kib: Option<u32>,

    /// Output file ("-" writes to stdout)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub header: HeaderArgs,

    /// Print the raw tag as hex instead of rendering it
    #[arg(long)]
    pub hex: bool,

    /// Prompt for every file name and parameter; empty answers take the default
    #[arg(long)]
    pub interactive: bool,
}

/// Arguments for rendering an existing digest
#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// Treat the input as hex text instead of raw bytes
    #[arg(long)]
    pub hex: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub header: HeaderArgs,

    /// Digest file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

/// Arguments for turning rendered symbols back into a digest
#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// Digest length in bytes; leading zero bytes are restored up to this length
    #[arg(short = 't', long)]
    pub tag_length: Option<u32>,

    /// Skip a leading "Found N characters" line
    #[arg(long)]
    pub header: bool,

    /// Write raw bytes instead of hex
    #[arg(short = 'r', long)]
    pub raw: bool,

    /// Encoded file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

/// Arguments for inspecting alphabets
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// List built-in alphabets
    #[arg(short, long)]
    pub list: bool,

    /// Tag length in bytes used for the digit bound
    #[arg(short = 't', long)]
    pub tag_length: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash files with Argon2id and render the tag in an alphabet
    Hash(HashArgs),
    /// Render a digest (raw bytes or hex) in an alphabet
    Encode(EncodeArgs),
    /// Turn rendered symbols back into the digest
    Decode(DecodeArgs),
    /// Show the base and symbol sizes of an alphabet
    Alphabet(InspectArgs),
    /// Print the effective configuration
    Config,
}
