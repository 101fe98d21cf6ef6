//! Navigation targets.

use serde::{Deserialize, Serialize};

/// A page the presentation layer can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Landing page. Where logout ends up.
    Home,
    /// Sign-in page. Where entry without a session ends up.
    Auth,
    /// The dashboard itself, once entry succeeded.
    Dashboard,
}

impl Route {
    /// URL path of the page.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Auth => "/auth",
            Self::Dashboard => "/dashboard",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
