use crate::cli::global::GlobalArgs;
use tagbase::Settings;

pub fn handle(_global: &GlobalArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", settings.to_toml()?);
    Ok(())
}
