use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use git_scm_version::{config, resolve_version_in, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-scm-version",
    version,
    about = "Derive a version string from git tags and working-tree state"
)]
struct Args {
    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Run as if started in this directory"
    )]
    directory: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Regular expression selecting version tags")]
    tag_pattern: Option<String>,

    #[arg(long, help = "Prefix stripped from the chosen tag")]
    tag_prefix: Option<String>,

    #[arg(short, long, action = ArgAction::Count, help = "Log resolution steps (-vv for more)")]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(version) => ui::display_version(&version),
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<String> {
    let mut config = config::load_config_in(&args.directory, args.config.as_deref())
        .context("Error loading config")?;

    if let Some(pattern) = &args.tag_pattern {
        config.tags.pattern = pattern.clone();
    }
    if let Some(prefix) = &args.tag_prefix {
        config.tags.prefix = prefix.clone();
    }

    let version = resolve_version_in(&args.directory, &config)?;
    Ok(version)
}
