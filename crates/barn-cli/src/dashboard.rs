//! # Dashboard Subcommand
//!
//! Signs in with a session token and runs the tracker as a line-driven
//! loop on stdin. The acknowledgment timer runs on the same runtime while
//! the loop waits for input.
//!
//! The token comes from `--token` or `BARN_SESSION_TOKEN`. Backend settings
//! come from `BARN_API_KEY`, `BARN_AUTH_URL`, `BARN_REST_URL`. With
//! `--offline` an in-memory demo account is used instead. `--quiet` sends
//! notifications to the log (`-v`) instead of the terminal.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

use barn_core::{QuantityUnit, SessionToken};
use barn_dashboard::{enter_dashboard, Collaborators, DashboardConfig, EntryOutcome, Route};
use barn_locale::Language;
use barn_session::{MemoryProfileService, Profile, ProfileService, SessionClient, SessionConfig};
use barn_tracker::{CatalogPreset, NotificationSink, TracingSink};

use crate::console::ConsoleSink;
use crate::render;
use crate::repl::{self, Flow, ReplCommand};

const OFFLINE_TOKEN: &str = "offline-demo";

/// Arguments for the `barn dashboard` subcommand.
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Display language (en, si, ta).
    #[arg(long)]
    pub lang: Option<Language>,

    /// Unit the tracker counts in (tons, acres).
    #[arg(long)]
    pub unit: Option<QuantityUnit>,

    /// Item catalog (seasonal, live-demo, farm-targets).
    #[arg(long)]
    pub catalog: Option<CatalogPreset>,

    /// Milliseconds the "updated" acknowledgment stays visible.
    #[arg(long)]
    pub ack_delay_ms: Option<u64>,

    /// Session token. Defaults to `BARN_SESSION_TOKEN`.
    #[arg(long)]
    pub token: Option<String>,

    /// Use an in-memory demo account instead of the backend.
    #[arg(long)]
    pub offline: bool,

    /// Log notifications instead of printing them.
    #[arg(long, short)]
    pub quiet: bool,
}

impl DashboardArgs {
    /// Overlay the flags that were given onto `config`.
    pub fn apply_to(&self, config: &mut DashboardConfig) {
        if let Some(lang) = self.lang {
            config.language = lang;
        }
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        if let Some(catalog) = self.catalog {
            config.catalog = catalog;
        }
        if let Some(ms) = self.ack_delay_ms {
            config.ack_delay_ms = ms;
        }
    }

    /// Where notifications go.
    pub fn sink(&self) -> Arc<dyn NotificationSink> {
        if self.quiet {
            Arc::new(TracingSink)
        } else {
            Arc::new(ConsoleSink)
        }
    }
}

/// Execute the dashboard subcommand.
pub async fn run_dashboard(
    args: &DashboardArgs,
    config_path: Option<&Path>,
    locale_dir: Option<&Path>,
) -> Result<u8> {
    let mut config = DashboardConfig::load(config_path).context("loading dashboard config")?;
    args.apply_to(&mut config);
    if let Some(dir) = locale_dir {
        config.locale_dir = Some(dir.to_path_buf());
    }
    tracing::debug!(?config, "resolved dashboard config");

    let translations = Arc::new(crate::load_translations(config.locale_dir.as_deref())?);

    let (service, token): (Arc<dyn ProfileService>, Option<SessionToken>) = if args.offline {
        let token = SessionToken::new(OFFLINE_TOKEN).context("building offline token")?;
        let (service, _) = MemoryProfileService::new().with_user(&token, demo_profile());
        (Arc::new(service), Some(token))
    } else {
        let session_config = SessionConfig::from_env().context("loading session backend config")?;
        let client = SessionClient::new(session_config).context("building session client")?;
        let raw = args
            .token
            .clone()
            .or_else(|| std::env::var("BARN_SESSION_TOKEN").ok());
        (Arc::new(client), raw.and_then(SessionToken::new))
    };

    let collaborators = Collaborators {
        service,
        sink: args.sink(),
        translations,
    };

    let mut dash = match enter_dashboard(collaborators, &config, token).await? {
        EntryOutcome::Ready(dash) => dash,
        EntryOutcome::Redirect(route) => {
            println!("Not signed in. Sign in at {route} and pass the session token.");
            return Ok(2);
        }
    };

    println!("→ {}", Route::Dashboard);
    println!("{}", render::render_header(&dash));
    println!("{}", render::render_tracker(&dash));
    println!("(type `help` for commands)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let command = match line.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(msg) => {
                println!("! {msg}");
                continue;
            }
        };
        let (out, flow) = repl::apply(&mut dash, command);
        if let Some(out) = out {
            println!("{out}");
        }
        match flow {
            Flow::Continue => {}
            Flow::Quit => return Ok(0),
            Flow::Logout => {
                let route = dash.logout().await;
                println!("→ {route}");
                return Ok(0);
            }
        }
    }
    Ok(0)
}

fn demo_profile() -> Profile {
    Profile {
        name: "Demo Farmer".to_string(),
        farm_name: Some("Barn Buddy Demo Farm".to_string()),
        farm_location: Some("Matale".to_string()),
        ..Profile::default()
    }
}
