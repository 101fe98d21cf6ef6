//! # Strings Subcommand
//!
//! Look up a localized string by dotted key, or list the keys a language
//! has not translated yet (they fall back to English).

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;

use barn_locale::{Language, Translations};

/// Arguments for the `barn strings` subcommand.
#[derive(Args, Debug)]
pub struct StringsArgs {
    /// Dotted key, e.g. `demo.updateHarvest`.
    pub key: Option<String>,

    /// Language to look up in.
    #[arg(long, default_value = "en")]
    pub lang: Language,

    /// List English keys missing from `--lang`.
    #[arg(long)]
    pub missing: bool,
}

/// Execute the strings subcommand.
pub fn run_strings(args: &StringsArgs, locale_dir: Option<&Path>) -> Result<u8> {
    let translations = crate::load_translations(locale_dir)?;
    for line in strings_output(args, &translations)? {
        println!("{line}");
    }
    Ok(0)
}

fn strings_output(args: &StringsArgs, translations: &Translations) -> Result<Vec<String>> {
    if args.missing {
        let missing = translations.missing_keys(args.lang);
        tracing::info!(language = %args.lang, count = missing.len(), "untranslated keys");
        return Ok(missing.into_iter().map(str::to_string).collect());
    }
    let Some(key) = args.key.as_deref() else {
        bail!("pass a key or --missing");
    };
    Ok(vec![translations.lookup(args.lang, key)?.to_string()])
}
