//! # CLI Layer
//!
//! This module is **one possible UI client** for stockroom. It is the only
//! place that knows about terminal I/O, argument parsing and exit codes.
//!
//! - `run()`: parses arguments, sets up logging and dispatches
//! - `init_context()`: resolves the data directory and opens the store
//! - `handle_*()`: per-command handlers that call the API and print

mod render;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use render::{eprint_messages, print_messages, render_product_table, render_stats};
use setup::{Cli, Commands};
use std::path::PathBuf;
use stockroom::api::{CmdMessage, CmdResult, ConfigAction, ProductEdit, StockApi};
use stockroom::config::StockConfig;
use stockroom::error::{Result, StockError};
use stockroom::store::fs::FsBackend;
use stockroom::store::ProductStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const HOME_ENV: &str = "STOCKROOM_HOME";

struct AppContext {
    api: StockApi<FsBackend>,
    config: StockConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { name, quantity }) => handle_add(&mut ctx, name, quantity),
        Some(Commands::Edit {
            product,
            name,
            quantity,
        }) => handle_edit(&mut ctx, product, name, quantity),
        Some(Commands::Remove { products }) => handle_remove(&mut ctx, products),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term)),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Seed) => handle_seed(&mut ctx),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

pub fn print_error(e: &StockError) {
    eprint_messages(&[CmdMessage::error(format!("Error: {}", e))]);
}

/// Logs go to stderr; `RUST_LOG` wins unless `--verbose` is given.
fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("stockroom=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StockError::Config("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = StockConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening store");

    let store = ProductStore::open_with_key(FsBackend::new(data_dir.clone()), &config.storage_key);
    let api = StockApi::new(store, data_dir);

    Ok(AppContext { api, config })
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
}

fn handle_add(ctx: &mut AppContext, name: String, quantity: i64) -> Result<()> {
    let result = ctx.api.add_product(name, quantity)?;
    print_result(&result);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    product: String,
    name: Option<String>,
    quantity: Option<i64>,
) -> Result<()> {
    let result = ctx
        .api
        .update_product(&product, ProductEdit::new(name, quantity))?;
    print_result(&result);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, products: Vec<String>) -> Result<()> {
    let result = ctx.api.remove_products(products.as_slice())?;
    print_result(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list_products(search.as_deref())?;
    print!("{}", render_product_table(&result.listed_products));
    if let Some(stats) = &result.stats {
        println!();
        print!("{}", render_stats(stats));
    }
    print_result(&result);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let dir = output
        .or_else(|| ctx.config.export_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.export_products(&dir)?;
    print_result(&result);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_products(&file)?;
    print_result(&result);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.seed_demo()?;
    print_result(&result);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.clear_products(yes)?;
    print_result(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in StockConfig::keys() {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_result(&result);
    Ok(())
}
