//! CLI parser
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
/// Generate storefront copy for artisans.
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "ARTISAN_DEBUG")]
    /// Enable debug logging. Env: ARTISAN_DEBUG
    pub debug: bool,

    #[clap(long, short, env = "ARTISAN_CONFIG")]
    /// Path to the JSON config file. Built-in defaults are used if it is missing.
    /// Env: ARTISAN_CONFIG
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an artisan biography.
    Bio,
    /// Generate a description for a product.
    Describe {
        #[clap(long)]
        /// Product id; output goes to `product<id>-desc`.
        product_id: String,
    },
    /// Print a data URL preview of an image.
    Preview { path: PathBuf },
    /// Ask for background removal / enhancement of an image.
    ProcessImage { path: Option<PathBuf> },
    /// Manage the config file.
    Config {
        #[clap(subcommand)]
        action: ConfigAction,
    },
    /// Store the Gemini API key in the OS keyring. The key is read from stdin.
    SetKey,
    /// Remove the Gemini API key from the OS keyring.
    DeleteKey,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write the built-in defaults to the config path.
    Init {
        #[clap(long)]
        /// Replace an existing file.
        force: bool,
    },
}
