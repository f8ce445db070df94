use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// A football team as published by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub sport_id: i64,
    #[serde(default)]
    pub country_id: Option<i64>,
    #[serde(default)]
    pub venue_id: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    pub name: String,
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub founded: Option<i64>,
    #[serde(rename = "type", default)]
    pub team_type: Option<String>,
    #[serde(default)]
    pub placeholder: Option<bool>,
    #[serde(default)]
    pub last_played_at: Option<String>,
}

impl Team {
    /// Team with only the required fields set.
    pub fn new(id: i64, sport_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            sport_id,
            country_id: None,
            venue_id: None,
            gender: None,
            name: name.into(),
            short_code: None,
            image_path: None,
            founded: None,
            team_type: None,
            placeholder: None,
            last_played_at: None,
        }
    }
}

impl Entity for Team {
    const KIND: EntityKind = EntityKind::Teams;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_from_provider_payload() {
        let team: Team = serde_json::from_value(json!({
            "id": 85,
            "sport_id": 1,
            "country_id": 320,
            "venue_id": 1708,
            "gender": "male",
            "name": "FC Copenhagen",
            "short_code": "FCK",
            "image_path": "https://cdn.sportmonks.com/images/soccer/teams/21/85.png",
            "founded": 1992,
            "type": "domestic",
            "placeholder": false,
            "last_played_at": "2024-05-26 12:00:00"
        }))
        .unwrap();

        assert_eq!(team.id, 85);
        assert_eq!(team.venue_id, Some(1708));
        assert_eq!(team.founded, Some(1992));
        assert_eq!(team.team_type.as_deref(), Some("domestic"));
        assert_eq!(team.placeholder, Some(false));
    }

    #[test]
    fn test_team_minimal_payload() {
        let team: Team =
            serde_json::from_value(json!({"id": 1, "sport_id": 1, "name": "Brøndby"})).unwrap();
        assert_eq!(team, Team::new(1, 1, "Brøndby"));
    }

    #[test]
    fn test_team_requires_sport_id() {
        let result = serde_json::from_value::<Team>(json!({"id": 1, "name": "Brøndby"}));
        assert!(result.is_err());
    }
}
