//! Wire types for the auth and profile services.

use serde::{Deserialize, Serialize};

use barn_core::{SessionToken, UserId};

/// The authenticated user, as returned by `GET /auth/v1/user`.
///
/// Unknown fields are ignored; the auth service returns many more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
}

/// A live session: the bearer token and the user it belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: SessionToken,
    pub user: SessionUser,
}

impl Session {
    pub fn user_id(&self) -> UserId {
        self.user.id
    }
}

/// A row of the `profiles` table.
///
/// `Profile::default()` is the blank profile shown when loading fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub farm_name: Option<String>,
    #[serde(default)]
    pub farm_location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_ignores_unknown_columns() {
        let json = serde_json::json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Nimal Perera",
            "farm_name": "Green Acres",
            "farm_location": "Matale",
            "created_at": "2025-01-01T00:00:00Z"
        });
        let profile: Profile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.name, "Nimal Perera");
        assert_eq!(profile.farm_name.as_deref(), Some("Green Acres"));
        assert_eq!(profile.farm_location.as_deref(), Some("Matale"));
    }

    #[test]
    fn profile_tolerates_null_columns() {
        let json = serde_json::json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Kamala",
            "farm_name": null
        });
        let profile: Profile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.farm_name, None);
        assert_eq!(profile.farm_location, None);
    }
}
