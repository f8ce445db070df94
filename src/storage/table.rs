//! Column mappings between entity structs and their SQLite tables

use rusqlite::types::Value;
use rusqlite::Row;

use crate::models::{Entity, League, Team};

/// An entity with a fixed table layout.
///
/// `COLUMNS[0]` is always `id`, and `to_values` yields one value per column in
/// the same order.
pub trait Table: Entity {
    const COLUMNS: &'static [&'static str];

    fn to_values(&self) -> Vec<Value>;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn table_name() -> &'static str {
        Self::KIND.as_str()
    }
}

fn opt_int(value: Option<i64>) -> Value {
    value.map_or(Value::Null, Value::Integer)
}

fn opt_text(value: &Option<String>) -> Value {
    value.clone().map_or(Value::Null, Value::Text)
}

fn opt_bool(value: Option<bool>) -> Value {
    value.map_or(Value::Null, |b| Value::Integer(i64::from(b)))
}

impl Table for League {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "sport_id",
        "country_id",
        "name",
        "active",
        "short_code",
        "image_path",
        "type",
        "sub_type",
        "last_played_at",
        "category",
        "has_jerseys",
    ];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            Value::Integer(self.sport_id),
            opt_int(self.country_id),
            Value::Text(self.name.clone()),
            Value::Integer(i64::from(self.active)),
            opt_text(&self.short_code),
            opt_text(&self.image_path),
            opt_text(&self.league_type),
            opt_text(&self.sub_type),
            opt_text(&self.last_played_at),
            opt_int(self.category),
            opt_bool(self.has_jerseys),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(League {
            id: row.get(0)?,
            sport_id: row.get(1)?,
            country_id: row.get(2)?,
            name: row.get(3)?,
            active: row.get(4)?,
            short_code: row.get(5)?,
            image_path: row.get(6)?,
            league_type: row.get(7)?,
            sub_type: row.get(8)?,
            last_played_at: row.get(9)?,
            category: row.get(10)?,
            has_jerseys: row.get(11)?,
        })
    }
}

impl Table for Team {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "sport_id",
        "country_id",
        "venue_id",
        "gender",
        "name",
        "short_code",
        "image_path",
        "founded",
        "type",
        "placeholder",
        "last_played_at",
    ];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            Value::Integer(self.sport_id),
            opt_int(self.country_id),
            opt_int(self.venue_id),
            opt_text(&self.gender),
            Value::Text(self.name.clone()),
            opt_text(&self.short_code),
            opt_text(&self.image_path),
            opt_int(self.founded),
            opt_text(&self.team_type),
            opt_bool(self.placeholder),
            opt_text(&self.last_played_at),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Team {
            id: row.get(0)?,
            sport_id: row.get(1)?,
            country_id: row.get(2)?,
            venue_id: row.get(3)?,
            gender: row.get(4)?,
            name: row.get(5)?,
            short_code: row.get(6)?,
            image_path: row.get(7)?,
            founded: row.get(8)?,
            team_type: row.get(9)?,
            placeholder: row.get(10)?,
            last_played_at: row.get(11)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_and_value_counts_match() {
        let league = League::new(1, 1, "Superliga");
        assert_eq!(league.to_values().len(), League::COLUMNS.len());

        let team = Team::new(1, 1, "Brøndby");
        assert_eq!(team.to_values().len(), Team::COLUMNS.len());
    }

    #[test]
    fn test_id_is_first_column() {
        assert_eq!(League::COLUMNS[0], "id");
        assert_eq!(Team::COLUMNS[0], "id");
        assert_eq!(League::table_name(), "leagues");
        assert_eq!(Team::table_name(), "teams");
    }

    #[test]
    fn test_optional_values_map_to_null() {
        let league = League::new(7, 1, "Cup");
        let values = league.to_values();

        assert_eq!(values[0], Value::Integer(7));
        assert_eq!(values[2], Value::Null);
        assert_eq!(values[4], Value::Integer(1));
        assert_eq!(values[11], Value::Null);
    }
}
