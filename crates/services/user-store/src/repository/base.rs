//! Generic CRUD store over a SeaORM entity.
//!
//! Typed repositories embed a `Store<E>` and add their own finders on top,
//! instead of inheriting a base trait.

use std::fmt;
use std::marker::PhantomData;

use sea_orm::{
    sea_query::IntoCondition, ActiveModelBehavior, ActiveModelTrait, DatabaseConnection,
    EntityName, EntityTrait, IntoActiveModel, Iterable, PaginatorTrait, PrimaryKeyToColumn,
    PrimaryKeyTrait, QueryFilter, QueryOrder,
};

use common::AppResult;

/// Primary key value type of an entity (e.g. `i32`).
pub type KeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Get-by-key, insert, update, delete and list for entity `E`.
pub struct Store<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Store<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: EntityTrait> fmt::Debug for Store<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("table", &E::default().table_name())
            .finish()
    }
}

impl<E> Store<E>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Find a record by primary key. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: KeyOf<E>) -> AppResult<Option<E::Model>> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    /// First record matching `condition`, as a single parameterized query.
    pub async fn find_one<C>(&self, condition: C) -> AppResult<Option<E::Model>>
    where
        C: IntoCondition + Send,
    {
        Ok(E::find().filter(condition).one(&self.db).await?)
    }

    /// All records, ascending by primary key.
    pub async fn find_all(&self) -> AppResult<Vec<E::Model>> {
        let query = E::PrimaryKey::iter()
            .fold(E::find(), |query, key| query.order_by_asc(key.into_column()));
        Ok(query.all(&self.db).await?)
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(E::find().count(&self.db).await?)
    }

    pub async fn exists(&self, id: KeyOf<E>) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Insert a new record and return it as stored (with generated keys).
    pub async fn insert<A>(&self, model: A) -> AppResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.insert(&self.db).await?)
    }

    /// Write the changed columns of an existing record.
    pub async fn update<A>(&self, model: A) -> AppResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.update(&self.db).await?)
    }

    /// Delete by primary key, returning the number of rows removed.
    pub async fn delete_by_id(&self, id: KeyOf<E>) -> AppResult<u64> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
