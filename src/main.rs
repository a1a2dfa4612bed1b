use anyhow::Context;
use clap::Parser;
use snow_catalog::domain::ports::ConfigProvider;
use snow_catalog::utils::{logger, validation::Validate};
use snow_catalog::{ActivityCatalog, CliConfig, LocalStorage, Menu};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting snow-catalog");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(config.output_dir().to_string());
    let stdin = std::io::stdin();
    let mut menu = Menu::new(stdin.lock(), std::io::stdout(), config, Box::new(storage));
    let mut catalog = ActivityCatalog::new();

    if let Err(e) = menu.run(&mut catalog) {
        tracing::error!(
            "Session failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("{}", e.user_friendly_message());

        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    // Catalog drops here along with every activity and location it still owns.
    drop(catalog);
    std::io::Write::flush(&mut std::io::stdout()).context("Failed to flush stdout")?;
    Ok(())
}
