//! The shared base-identifier sequence for the subtype tables.

use sea_orm::{ActiveModelTrait, DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel, Set};

use super::entity::staff_ids;

/// Allocate the next base id inside the caller's transaction.
///
/// The allocation row travels with the transaction, so a rollback also
/// returns the id.
///
/// # Errors
/// Returns [`DbErr`] if the allocation row is missing or the update fails.
pub async fn next_staff_id(txn: &DatabaseTransaction) -> Result<i64, DbErr> {
    let row = staff_ids::Entity::find()
        .one(txn)
        .await?
        .ok_or_else(|| DbErr::Custom("staff id allocation row is missing".to_owned()))?;
    let id = row.next_id;

    let mut allocation = row.into_active_model();
    allocation.next_id = Set(id + 1);
    allocation.update(txn).await?;

    Ok(id)
}
