use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version)]
#[command(about = "Keep track of what is on the shelves", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $STOCKROOM_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    #[command(alias = "a")]
    Add {
        /// Product name (at least 2 characters)
        name: String,

        /// Quantity in stock
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Change a product's name and/or quantity
    #[command(alias = "e")]
    Edit {
        /// Index (e.g. 3) or id of the product
        product: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New quantity
        #[arg(short, long, allow_negative_numbers = true)]
        quantity: Option<i64>,
    },

    /// Remove one or more products
    #[command(alias = "rm")]
    Remove {
        /// Indexes or ids of the products (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        products: Vec<String>,
    },

    /// List products
    #[command(alias = "ls")]
    List {
        /// Only show products whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search products by name
    Search { term: String },

    /// Show stock totals
    Stats,

    /// Write a JSON backup of all products
    Export {
        /// Output directory (defaults to config export-dir, then the current directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Add the products of a JSON backup
    Import { file: PathBuf },

    /// Add a handful of demo products
    Seed,

    /// Remove every product
    Clear {
        /// Confirm removal of all data
        #[arg(long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
