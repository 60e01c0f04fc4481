mod args;
mod config;
mod global;
mod handlers;
mod prompt;

use clap::Parser;
use tagbase::Settings;
use tracing_subscriber::EnvFilter;

use args::Commands;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "tagbase")]
#[command(version)]
#[command(about = "Hash files with Argon2id and render the tag in any alphabet, one symbol per line", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Logs go to stderr so rendered output on stdout stays clean.
fn init_logging(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(global.log_filter()));

    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let settings = Settings::load_with_overrides(cli.global.config.as_deref())?;

    match cli.command {
        Commands::Hash(args) => handlers::hash::handle(args, &cli.global, &settings),
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &settings),
        Commands::Alphabet(args) => handlers::alphabet::handle(args, &cli.global, &settings),
        Commands::Config => handlers::config::handle(&cli.global, &settings),
    }
}
