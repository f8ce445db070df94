//! Entity service: repository access plus existence-aware error mapping

use std::marker::PhantomData;

use crate::error::{Result, ServiceError};
use crate::models::BulkUpsertResult;
use crate::storage::{EntityRepository, Table};

/// Wraps a repository and turns absent or duplicate ids into typed errors.
pub struct EntityService<T, R> {
    repository: R,
    _entity: PhantomData<T>,
}

impl<T, R> EntityService<T, R>
where
    T: Table,
    R: EntityRepository<T>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    pub fn get_all(&self) -> Result<Vec<T>> {
        self.repository.get_all()
    }

    pub fn get_by_id(&self, id: i64) -> Result<T> {
        self.repository
            .get_by_id(id)?
            .ok_or(ServiceError::NotFound { kind: T::KIND, id })
    }

    pub fn create(&self, entity: &T) -> Result<T> {
        let id = entity.id();
        if self.repository.get_by_id(id)?.is_some() {
            return Err(ServiceError::Conflict { kind: T::KIND, id });
        }
        self.repository.create(entity)
    }

    pub fn bulk_upsert(&self, entities: &[T]) -> Result<BulkUpsertResult> {
        self.repository.bulk_upsert(entities)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        if self.repository.delete(id)? {
            Ok(())
        } else {
            Err(ServiceError::NotFound { kind: T::KIND, id })
        }
    }
}
