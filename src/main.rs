use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use shapeboard::config::Config;
use shapeboard::session::{Session, options_from_config};
use std::io::{self, Read, Write};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SHAPEBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "shapeboard")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Scripted editor for circles, diamonds and arrows on a drawing board")]
struct Cli {
    /// Command script to run (reads stdin when omitted or "-")
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Seed for random shape sizes and colors (overrides the config file)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Config file to use instead of ~/.config/shapeboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for exported images (overrides the config file)
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Write the documented example config to the config directory and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read script from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut options = options_from_config(&config);
    options.override_seed(cli.seed);
    options.override_export_dir(cli.export_dir);

    let script = read_script(cli.script.as_ref())?;
    let mut session = Session::new(options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.run_script(&script, &mut out)?;
    write!(out, "{}", session.roster_text())?;
    out.flush()?;

    Ok(())
}
