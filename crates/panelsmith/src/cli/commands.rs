//! CLI command definitions.

use clap::{Parser, Subcommand};
use panelsmith_models::{DEFAULT_BASE_URL, GEMINI_API_KEY_ENV};
use std::path::PathBuf;

/// Panelsmith - comic panels from Gemini, narrated as they stream in
#[derive(Parser, Debug)]
#[command(name = "panelsmith")]
#[command(about = "Generate comic panels with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Gemini API key
    #[arg(long, global = true, env = GEMINI_API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini API root
    #[arg(long, global = true, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate panels from a book
    Generate {
        /// Panel book TOML file (built-in intro comic if omitted)
        #[arg(long)]
        book: Option<PathBuf>,

        /// Only generate these panels (repeatable)
        #[arg(long = "panel", value_name = "NAME")]
        panels: Vec<String>,

        /// Directory images are written to (current directory if omitted)
        #[arg(long, short)]
        output_dir: Option<PathBuf>,

        /// Override the book's model
        #[arg(long)]
        model: Option<String>,

        /// Run all panels at once instead of one after another
        #[arg(long)]
        parallel: bool,
    },

    /// List the panels in a book
    List {
        /// Panel book TOML file (built-in intro comic if omitted)
        #[arg(long)]
        book: Option<PathBuf>,
    },
}
