//! # barn-cli — Terminal Front End
//!
//! Provides the `barn` command:
//!
//! - `barn dashboard` — sign in with a session token and drive the harvest
//!   tracker from line input. `--offline` uses an in-memory demo account.
//! - `barn strings` — look up or audit the localized string tables.
//!
//! ```bash
//! BARN_API_KEY=... BARN_SESSION_TOKEN=... barn dashboard --lang si
//! barn dashboard --offline --catalog farm-targets --unit acres
//! barn strings tracker.updatedTitle --lang ta
//! barn strings --missing --lang si
//! ```

pub mod console;
pub mod dashboard;
pub mod render;
pub mod repl;
pub mod strings;

use std::path::Path;

use anyhow::{Context, Result};

use barn_locale::Translations;

/// Embedded string tables, with overrides from `dir` if given.
pub fn load_translations(dir: Option<&Path>) -> Result<Translations> {
    match dir {
        Some(dir) => Translations::load_dir(dir)
            .with_context(|| format!("loading string tables from {}", dir.display())),
        None => Translations::embedded().context("loading embedded string tables"),
    }
}
