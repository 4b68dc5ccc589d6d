use anyhow::Context;
use person_roster::utils::{logger, validation::Validate};
use person_roster::{FileRosterPipeline, LocalStorage, RosterEngine, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .context("Usage: toml_roster <config.toml>")?;

    logger::init_cli_logger(false);

    let config = TomlConfig::from_file(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path))?;
    config.validate()?;

    tracing::info!("Running roster job: {}", config.roster.name);

    let pipeline = FileRosterPipeline::new(LocalStorage::new(), config);
    let engine = RosterEngine::new(pipeline);
    let output_path = engine.run()?;

    println!("✅ Roster report saved to: {}", output_path);
    Ok(())
}
