//! huelog - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ColorMode, Commands, ConfigCommands};
use huelog::{Colorizers, Config};

fn init_tracing(verbose: bool) {
    let default = if verbose { "huelog=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn colors_wanted(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load()?;
    if !colors_wanted(cli.color) {
        config = config.without_colors();
    }
    huelog::install(Colorizers::new(config))?;

    match cli.command {
        Commands::Token { glue, text } => commands::token::handle(&glue, &text),
        Commands::Highlight { text } => commands::highlight::handle(&text),
        Commands::Auto { values } => commands::auto::handle(&values),
        Commands::Table {
            delimiter,
            export,
            align,
        } => commands::table::handle(delimiter, export, align),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
    }
}
