//! win-java CLI entry point.

use anyhow::Result;
use clap::Parser;

use win_java::cli::{commands, handle_error, Cli, Commands};
use win_java::infrastructure::config::ConfigLoader;
use win_java::infrastructure::logging::{LogConfig, LoggerImpl};
use win_java::Config;

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args, cli.json),
        Commands::JavaHome(args) => commands::java_home::execute(args, &config, cli.json),
        Commands::CaInstall(args) => commands::ca_install::execute(args, &config, cli.json),
        Commands::Apply(args) => commands::apply::execute(args, &config, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
