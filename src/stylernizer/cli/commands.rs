//! # CLI Layer
//!
//! One possible UI client for stylernizer. It is the only place that parses
//! arguments, installs the tracing subscriber and writes to the terminal.
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: builds the API from the environment settings
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::render::{print_messages, print_outcomes, print_tree};
use super::setup::{Cli, Commands};
use clap::Parser;
use stylernizer::api::Stylernizer;
use stylernizer::config::Settings;
use stylernizer::error::Result;
use stylernizer::gallery;
use stylernizer::store::fs::FileCache;
use stylernizer::telemetry::init_tracing;

struct AppContext {
    api: Stylernizer<FileCache>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _ = init_tracing(&cli.log_level);

    let mut ctx = init_context()?;

    match cli.command {
        Commands::Register { names } => handle_register(&mut ctx, names),
        Commands::List { names } => handle_list(&ctx, names),
        Commands::Run { names, save, show } => handle_run(&mut ctx, names, save, show),
    }
}

fn init_context() -> Result<AppContext> {
    let settings = Settings::from_env();
    let store = FileCache::new(settings.cache_file.clone());
    let (api, loaded) = Stylernizer::open(settings, gallery::catalog(), store)?;
    print_messages(&loaded.messages);
    Ok(AppContext { api })
}

/// `None` when no names were given, so every key matches.
fn as_filter(names: &[String]) -> Option<&[String]> {
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

fn handle_register(ctx: &mut AppContext, names: Vec<String>) -> Result<()> {
    let result = ctx.api.import_modules(&names)?;
    print_tree(result.tree.as_ref());
    print_messages(&result.messages);

    let dumped = ctx.api.dump_cache()?;
    print_messages(&dumped.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, names: Vec<String>) -> Result<()> {
    let result = ctx.api.tree(as_filter(&names))?;
    print_tree(result.tree.as_ref());
    print_messages(&result.messages);
    Ok(())
}

fn handle_run(ctx: &mut AppContext, names: Vec<String>, save: bool, show: bool) -> Result<()> {
    let result = ctx.api.plot(as_filter(&names), save, show)?;
    print_outcomes(&result.plotted);
    print_messages(&result.messages);
    Ok(())
}
