use clap::Parser;
use person_roster::utils::{logger, validation::Validate};
use person_roster::{CliConfig, FileRosterPipeline, LocalStorage, RosterEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting person-roster CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let pipeline = FileRosterPipeline::new(storage, config);
    let engine = RosterEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Roster report completed successfully!");
            println!("✅ Roster report completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Roster report failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
