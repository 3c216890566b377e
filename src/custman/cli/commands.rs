//! Context setup and dispatch for the CLI.
//!
//! `run()` parses arguments, installs logging, resolves configuration, builds
//! the API over an in-memory store, optionally seeds it, and hands control to
//! the interactive [`Shell`] bound to stdin/stdout.

use super::logging::init_logging;
use super::prompt::Prompter;
use super::render::Renderer;
use super::samples::seed;
use super::setup::Cli;
use super::shell::Shell;
use clap::Parser;
use console::Term;
use custman::api::CustomerApi;
use custman::config::ManagerConfig;
use custman::error::Result;
use custman::store::memory::InMemoryStore;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    debug!(?config, "configuration resolved");

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let renderer = Renderer::new(use_color, &config.date_format)?;

    let mut api = CustomerApi::with_config(InMemoryStore::new(), &config);
    if config.seed_samples && !cli.no_seed {
        seed(&mut api)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    Shell::new(api, prompter, renderer).run()
}

fn load_config(cli: &Cli) -> Result<ManagerConfig> {
    let mut config = match config_dir(cli) {
        Some(dir) => ManagerConfig::load(dir)?,
        None => ManagerConfig::default(),
    };
    if let Some(capacity) = cli.capacity {
        config.set_capacity(capacity)?;
    }
    Ok(config)
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        ProjectDirs::from("com", "custman", "custman").map(|dirs| dirs.config_dir().to_path_buf())
    })
}
