use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

fn default_active() -> bool {
    true
}

/// A football league as published by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: i64,
    pub sport_id: i64,
    #[serde(default)]
    pub country_id: Option<i64>,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(rename = "type", default)]
    pub league_type: Option<String>,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub last_played_at: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub has_jerseys: Option<bool>,
}

impl League {
    /// League with only the required fields set.
    pub fn new(id: i64, sport_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            sport_id,
            country_id: None,
            name: name.into(),
            active: true,
            short_code: None,
            image_path: None,
            league_type: None,
            sub_type: None,
            last_played_at: None,
            category: None,
            has_jerseys: None,
        }
    }
}

impl Entity for League {
    const KIND: EntityKind = EntityKind::Leagues;

    fn id(&self) -> i64 {
        self.id
    }
}
