use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use spdlog::{debug, error};

use hugopost::config::{Config, load_config};
use hugopost::logger::configure_logger;

use crate::convert::convert_cmd;
use crate::list::list_cmd;
use crate::post::post_cmd;
use crate::validate::validate_cmd;

mod convert;
mod list;
mod post;
mod validate;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file. Defaults to ./hugopost.toml, then the user config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert exported drafts into Hugo posts
    Convert(ConvertArgs),
    /// Check the front matter of every post
    Validate(ValidateArgs),
    /// Create a new post
    New(NewArgs),
    /// List posts, newest first
    List(ListArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Directory with the drafts
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Directory receiving the converted posts
    #[arg(short, long)]
    dest_dir: Option<PathBuf>,

    /// File name prefix selecting the drafts
    #[arg(short, long)]
    prefix: Option<String>,

    /// Tag written to every post. Repeat for more tags, replaces the configured ones
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Day offset of the first post
    #[arg(long)]
    start_offset: Option<u32>,

    /// Mark converted posts as drafts
    #[arg(long)]
    draft: bool,

    /// Keep existing posts instead of overwriting them
    #[arg(long)]
    no_clobber: bool,

    /// Show what would be written without touching the disk
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Content directory, or a single post
    path: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct NewArgs {
    /// Title of the post
    title: String,

    /// Name of the author. If empty, OS user real name is being used
    #[arg(short, long)]
    author: Option<String>,

    /// Tag of the post. Repeat for more tags, replaces the configured ones
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Directory the post is created in
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Writes the new post content to the stdout
    #[arg(long)]
    stdout: bool,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Content directory
    content_dir: Option<PathBuf>,

    /// Hide drafts
    #[arg(long)]
    published: bool,
}

fn open_config(cli: &Cli) -> Result<Config> {
    let (config, cfg_path) = load_config(cli.config.as_deref())
        .context("Error loading configuration")?;
    configure_logger(&config).context("Error configuring the logger")?;
    match cfg_path {
        Some(path) => debug!("Using configuration {}", path.display()),
        None => debug!("No configuration file found, using defaults"),
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<bool> {
    let config = open_config(&cli)?;

    match cli.command {
        Command::Convert(args) => convert_cmd(&config, args),
        Command::Validate(args) => validate_cmd(&config, args),
        Command::New(args) => post_cmd(&config, args),
        Command::List(args) => list_cmd(&config, args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
