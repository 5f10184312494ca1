//! Appending sub-records to an array field of a parent document.
//!
//! The mutation is a plain read-modify-write: the parent is loaded, the child is pushed
//! onto its in-memory array, and the whole array column is written back. Two concurrent
//! appends to the same parent can therefore interleave, and the later write replaces
//! the earlier one's array (last write wins). No lock, revision check or transaction
//! is taken.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, Value,
};

pub struct NestedCollectionMutator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NestedCollectionMutator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends `child` to the array stored in `child_field` of one parent document.
    ///
    /// The parent is the first document of `E` whose `parent_key` column equals
    /// `parent_key_value`. The child is appended as given, without validating any of
    /// its fields.
    ///
    /// # Arguments
    /// - `parent_key` - Column identifying the parent (identifier or another key such as userName)
    /// - `parent_key_value` - Value the parent's key column must equal
    /// - `child_field` - JSON column holding the parent's array of sub-records
    /// - `children` - Accessor for the same array on the loaded model
    /// - `child` - Sub-record to append
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The parent as persisted, with the child as its last element
    /// - `Ok(None)` - No parent matched; nothing was written
    /// - `Err(DbErr)` - Store error while reading or writing the parent
    pub async fn append_child<E, V, C>(
        &self,
        parent_key: E::Column,
        parent_key_value: V,
        child_field: E::Column,
        children: fn(&mut E::Model) -> &mut Vec<C>,
        child: C,
    ) -> Result<Option<E::Model>, DbErr>
    where
        E: EntityTrait,
        E::Model: IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        V: Into<Value>,
    {
        let Some(mut parent) = E::find()
            .filter(parent_key.eq(parent_key_value))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        children(&mut parent).push(child);

        let array = parent.get(child_field);
        let mut active = parent.into_active_model();
        active.set(child_field, array);

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }
}
