use anyhow::Context;
use clap::Parser;
use vanika::cli::Cli;
use vanika::config::Config;
use vanika::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    config.apply_env(|name| std::env::var(name).ok());
    config.apply_overrides(cli.overrides());
    config.validate()?;

    if cli.print_config {
        print!(
            "{}",
            toml::to_string(&config).context("serializing configuration")?
        );
        return Ok(());
    }

    vanika::ui::runtime::run(&config).context("running terminal UI")?;
    Ok(())
}
