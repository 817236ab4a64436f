//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the panelsmith binary.

mod commands;
mod generate;
mod list;

pub use commands::{Cli, Commands};
pub use generate::{GenerateOptions, handle_generate_command};
pub use list::handle_list_command;

use panelsmith_comic::PanelBook;
use panelsmith_error::PanelsmithResult;
use std::path::Path;

/// Loads a book from `path`, or the built-in intro comic.
pub fn load_book(path: Option<&Path>) -> PanelsmithResult<PanelBook> {
    match path {
        Some(path) => PanelBook::from_file(path),
        None => Ok(PanelBook::intro_comic()),
    }
}
