//! `lumen` - create, inspect and check Lumen site configuration files.

mod cli;

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use lumen_config::{
    ConfigFormat, SiteConfig, config::util::find_config_file, debug, log, logger, site_config,
};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        log!("error"; "{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Init { force, format } => cli::init::write_config(&cli.config, *format, *force),
        Commands::Check => cli::check::check_config(&resolve_config_path(cli)?).map(|_| ()),
        Commands::Show { format, builtin } => {
            let (config, path) = load_config(cli, *builtin)?;
            let format = format
                .or_else(|| path.as_deref().map(ConfigFormat::from_path))
                .unwrap_or_default();
            print!("{}", cli::show::render_config(&config, format)?);
            Ok(())
        }
        Commands::Contacts { builtin } => {
            let (config, _) = load_config(cli, *builtin)?;
            let lines = cli::show::contact_lines(&config);
            if lines.is_empty() {
                log!("contacts"; "no visible contacts");
            }
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// Built-in record, or the config file found from cwd.
fn load_config(cli: &Cli, builtin: bool) -> Result<(SiteConfig, Option<PathBuf>)> {
    if builtin {
        return Ok((site_config().clone(), None));
    }
    let path = resolve_config_path(cli)?;
    Ok((SiteConfig::load(&path)?, Some(path)))
}

/// Search upward from cwd for the config file.
fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    match find_config_file(&cli.config) {
        Some(path) => {
            debug!("load"; "using {}", path.display());
            Ok(path)
        }
        None => bail!(
            "Config file '{}' not found. Run 'lumen init' to create one.",
            cli.config.display()
        ),
    }
}
