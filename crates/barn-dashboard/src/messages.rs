//! Localized texts for the dashboard and its tracker.

use barn_core::{Category, QuantityUnit};
use barn_locale::{Language, Translations};
use barn_tracker::{Notification, TrackerMessages, UnitLabels};

/// Tracker notification templates in `language`.
pub fn tracker_messages(translations: &Translations, language: Language) -> TrackerMessages {
    let text = |key: &str| translations.text(language, key);
    TrackerMessages {
        updated_title: text("tracker.updatedTitle"),
        updated_description: text("tracker.updatedDescription"),
        invalid_title: text("tracker.invalidTitle"),
        invalid_description: text("tracker.invalidDescription"),
        units: UnitLabels {
            tons: text("tracker.units.tons"),
            acres: text("tracker.units.acres"),
        },
    }
}

/// Display name of `category`.
pub fn category_label(translations: &Translations, language: Language, category: Category) -> String {
    let key = match category {
        Category::Fruits => "tracker.fruits",
        Category::Vegetables => "tracker.vegetables",
    };
    translations.text(language, key)
}

/// Display name of `unit`.
pub fn unit_label(translations: &Translations, language: Language, unit: QuantityUnit) -> String {
    let key = match unit {
        QuantityUnit::Tons => "tracker.units.tons",
        QuantityUnit::Acres => "tracker.units.acres",
    };
    translations.text(language, key)
}

/// Error notification titled `errors.title` with the text under
/// `description_key`.
pub(crate) fn error_notification(
    translations: &Translations,
    language: Language,
    description_key: &str,
) -> Notification {
    Notification::error(
        translations.text(language, "errors.title"),
        translations.text(language, description_key),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use barn_core::Quantity;

    fn translations() -> Translations {
        Translations::embedded().unwrap()
    }

    #[test]
    fn english_messages_match_tracker_defaults() {
        let msgs = tracker_messages(&translations(), Language::En);
        assert_eq!(msgs, TrackerMessages::default());
    }

    #[test]
    fn tamil_update_message_is_filled() {
        let msgs = tracker_messages(&translations(), Language::Ta);
        let n = msgs.updated("Tomato", Quantity::new(12.5).unwrap(), QuantityUnit::Tons);
        assert_eq!(n.title, "அறுவடை புதுப்பிக்கப்பட்டது!");
        assert_eq!(n.description, "Tomato க்கு 12.5 டன் சேர்க்கப்பட்டது");
    }

    #[test]
    fn category_and_unit_labels() {
        let t = translations();
        assert_eq!(category_label(&t, Language::Si, Category::Fruits), "පලතුරු");
        assert_eq!(unit_label(&t, Language::En, QuantityUnit::Acres), "acres");
    }

    #[test]
    fn error_notification_uses_error_table() {
        let n = error_notification(&translations(), Language::En, "errors.profileLoad");
        assert_eq!(n.title, "Error");
        assert_eq!(n.description, "Failed to load profile data");
    }
}
