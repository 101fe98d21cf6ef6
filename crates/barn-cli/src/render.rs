//! Plain-text rendering of the dashboard.

use std::fmt::Write;

use barn_core::format_amount;
use barn_dashboard::Dashboard;
use barn_tracker::{ItemView, TrackerPhase};

/// Header: greeting, farm line and the display language.
pub fn render_header(dash: &Dashboard) -> String {
    let mut out = dash.greeting();
    if let Some(farm) = dash.farm_line() {
        out.push('\n');
        out.push_str(&farm);
    }
    let _ = write!(out, "\n[{}]", dash.language().native_name());
    out
}

/// The tracker in its current phase.
pub fn render_tracker(dash: &Dashboard) -> String {
    let view = dash.view();
    let unit = dash.unit_label();
    let mut out = String::new();
    let _ = writeln!(out, "── {} ──", dash.text("dashboard.trackerTitle"));

    match view.phase {
        TrackerPhase::NoCategory => {
            let _ = writeln!(out, "{}:", dash.text("tracker.chooseCategory"));
            for group in &view.categories {
                let _ = writeln!(
                    out,
                    "  {:<12} {} {} {unit}",
                    dash.category_label(group.category),
                    dash.text("tracker.total"),
                    display_amount(group.total),
                );
            }
        }
        TrackerPhase::CategorySelected { category, .. } => {
            let Some(group) = view.categories.iter().find(|g| g.category == category) else {
                return out;
            };
            let _ = writeln!(
                out,
                "{} · {} {} {unit}",
                dash.category_label(category),
                dash.text("tracker.total"),
                display_amount(group.total),
            );
            for (i, item) in group.items.iter().enumerate() {
                let _ = writeln!(out, "{}", render_item(i, item, &unit));
            }
            let prompt = dash
                .text("tracker.enterAmount")
                .replace("{unit}", &unit);
            let _ = writeln!(out, "{prompt}: {}", view.pending_input);
            let _ = writeln!(out, "({})", dash.text("tracker.back"));
        }
    }

    if dash.ack_visible() {
        let _ = writeln!(out, "✓ {}", dash.text("tracker.updated"));
    }
    out
}

fn render_item(index: usize, item: &ItemView, unit: &str) -> String {
    let marker = if item.selected { '>' } else { ' ' };
    let mut line = format!(
        "{marker} {}. {} {:<12} {} {unit}",
        index + 1,
        item.icon,
        item.name,
        display_amount(item.accumulated),
    );
    if let (Some(capacity), Some(percent)) = (item.capacity, item.progress_percent) {
        let _ = write!(line, " / {} ({percent}%)", display_amount(capacity));
    }
    line
}

/// Quantities rounded to two decimals for display.
pub fn display_amount(value: f64) -> String {
    format_amount((value * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use barn_core::{Category, SessionToken};
    use barn_dashboard::{enter_dashboard, Collaborators, DashboardConfig, EntryOutcome};
    use barn_locale::Translations;
    use barn_session::{MemoryProfileService, Profile};
    use barn_tracker::{CatalogPreset, MemorySink};

    async fn dashboard(config: DashboardConfig) -> Dashboard {
        let token = SessionToken::new("t").unwrap();
        let (svc, _) = MemoryProfileService::new().with_user(
            &token,
            Profile {
                name: "Kamala".into(),
                farm_name: Some("Hill Farm".into()),
                ..Profile::default()
            },
        );
        let collab = Collaborators {
            service: Arc::new(svc),
            sink: Arc::new(MemorySink::new()),
            translations: Arc::new(Translations::embedded().unwrap()),
        };
        match enter_dashboard(collab, &config, Some(token)).await.unwrap() {
            EntryOutcome::Ready(d) => *d,
            EntryOutcome::Redirect(r) => panic!("redirected to {r}"),
        }
    }

    #[test]
    fn display_amount_hides_float_noise() {
        assert_eq!(display_amount(0.1 + 0.2), "0.3");
        assert_eq!(display_amount(12.5), "12.5");
        assert_eq!(display_amount(0.0), "0");
    }

    #[tokio::test]
    async fn header_without_location_shows_farm_only() {
        let dash = dashboard(DashboardConfig::default()).await;
        assert_eq!(render_header(&dash), "Welcome back, Kamala!\nHill Farm\n[English]");
    }

    #[tokio::test]
    async fn category_list_shows_totals() {
        let dash = dashboard(DashboardConfig::default()).await;
        let out = render_tracker(&dash);
        assert!(out.contains("Choose a category:"));
        assert!(out.contains("Fruits"));
        assert!(out.contains("Total 0 tons"));
    }

    #[tokio::test]
    async fn open_category_marks_selection_and_progress() {
        let mut dash = dashboard(DashboardConfig {
            catalog: CatalogPreset::LiveDemo,
            ..DashboardConfig::default()
        })
        .await;
        dash.on_select_category(Category::Vegetables).unwrap();
        dash.on_select_item("Tomato").unwrap();
        dash.on_input("2");

        let out = render_tracker(&dash);
        let tomato = out.lines().find(|l| l.contains("Tomato")).unwrap();
        assert!(tomato.starts_with('>'));
        assert!(tomato.contains("75 tons / 80 (94%)"));
        assert!(out.contains("Enter amount (tons): 2"));
    }
}
