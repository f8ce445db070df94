//! Entity repository contract and its SQLite implementation

use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::marker::PhantomData;

use super::table::Table;
use crate::error::Result;
use crate::models::BulkUpsertResult;

/// Direct persistence access for one entity type.
pub trait EntityRepository<T: Table> {
    /// Every stored row, ordered by id.
    fn get_all(&self) -> Result<Vec<T>>;

    /// Row with the given id, `None` if absent.
    fn get_by_id(&self, id: i64) -> Result<Option<T>>;

    /// Insert unconditionally; a duplicate id surfaces as a database error.
    fn create(&self, entity: &T) -> Result<T>;

    /// Insert unseen ids and overwrite seen ones, committing once.
    fn bulk_upsert(&self, entities: &[T]) -> Result<BulkUpsertResult>;

    /// Returns false when nothing matched.
    fn delete(&self, id: i64) -> Result<bool>;
}

/// SQLite-backed repository borrowing a connection for one unit of work.
pub struct SqliteRepository<'conn, T> {
    conn: &'conn Connection,
    _table: PhantomData<T>,
}

impl<'conn, T: Table> SqliteRepository<'conn, T> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _table: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!("SELECT {} FROM {}", T::COLUMNS.join(", "), T::table_name())
    }

    fn insert_sql() -> String {
        let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("?{i}")).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::table_name(),
            T::COLUMNS.join(", "),
            placeholders.join(", ")
        )
    }

    /// Full overwrite of every non-key column; `?1` binds the id.
    fn update_sql() -> String {
        let assignments: Vec<String> = T::COLUMNS
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, column)| format!("{column} = ?{}", i + 1))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE id = ?1",
            T::table_name(),
            assignments.join(", ")
        )
    }

    fn find(conn: &Connection, id: i64) -> Result<Option<T>> {
        let mut stmt = conn.prepare_cached(&format!("{} WHERE id = ?1", Self::select_sql()))?;
        let found = stmt.query_row(params![id], |row| T::from_row(row)).optional()?;
        Ok(found)
    }
}

impl<T: Table> EntityRepository<T> for SqliteRepository<'_, T> {
    fn get_all(&self) -> Result<Vec<T>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id", Self::select_sql()))?;

        let rows = stmt.query_map([], |row| T::from_row(row))?;

        let mut entities = Vec::new();
        for row in rows {
            entities.push(row?);
        }
        Ok(entities)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<T>> {
        Self::find(self.conn, id)
    }

    fn create(&self, entity: &T) -> Result<T> {
        self.conn
            .execute(&Self::insert_sql(), params_from_iter(entity.to_values()))?;

        // Read back what the store holds, defaults included
        Ok(Self::find(self.conn, entity.id())?.unwrap_or_else(|| entity.clone()))
    }

    fn bulk_upsert(&self, entities: &[T]) -> Result<BulkUpsertResult> {
        let tx = self.conn.unchecked_transaction()?;
        let insert_sql = Self::insert_sql();
        let update_sql = Self::update_sql();
        let mut counts = BulkUpsertResult::default();

        // Lookups run inside the transaction, so a repeated id sees the
        // earlier occurrence's pending insert and becomes an update.
        for entity in entities {
            if Self::find(&tx, entity.id())?.is_some() {
                tx.prepare_cached(&update_sql)?
                    .execute(params_from_iter(entity.to_values()))?;
                counts.updated += 1;
            } else {
                tx.prepare_cached(&insert_sql)?
                    .execute(params_from_iter(entity.to_values()))?;
                counts.created += 1;
            }
        }

        // An early return above drops `tx`, which rolls the whole batch back
        tx.commit()?;

        tracing::info!(
            entity = %T::KIND,
            created = counts.created,
            updated = counts.updated,
            "bulk upsert committed"
        );
        Ok(counts)
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let removed = self.conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", T::table_name()),
            params![id],
        )?;
        Ok(removed > 0)
    }
}
