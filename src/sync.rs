//! Sync Layer
//!
//! Calls the foods backend and hands back the records the store should apply.
//! Nothing here touches reactive state; callers apply results after the
//! request resolves.

use thiserror::Error;

use crate::api::{ApiError, FoodApi};
use crate::models::{Food, FoodDraft, FoodPatch, NewFood};

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Update submitted without a selected food
    #[error("no food selected for editing")]
    NoEditTarget,
}

/// Fetch the full collection
pub async fn load_foods<A: FoodApi + ?Sized>(api: &A) -> SyncResult<Vec<Food>> {
    let foods = api.list_foods().await?;
    log::info!("loaded {} foods", foods.len());
    Ok(foods)
}

/// Create a food from form input. `available` is always sent as true.
pub async fn add_food<A: FoodApi + ?Sized>(api: &A, draft: FoodDraft) -> SyncResult<Food> {
    let created = api.create_food(&NewFood::from(draft)).await?;
    log::debug!("created food {}", created.id);
    Ok(created)
}

/// Send the edit target merged with the submitted fields
pub async fn update_food<A: FoodApi + ?Sized>(
    api: &A,
    editing: Option<&Food>,
    patch: FoodPatch,
) -> SyncResult<Food> {
    let target = editing.ok_or(SyncError::NoEditTarget)?;
    let merged = target.merged_with(&patch);
    let updated = api.update_food(target.id, &merged).await?;
    log::debug!("updated food {}", updated.id);
    Ok(updated)
}

/// Flip availability of a listed food
pub async fn toggle_availability<A: FoodApi + ?Sized>(api: &A, food: &Food) -> SyncResult<Food> {
    let updated = api.update_food(food.id, &food.with_available_toggled()).await?;
    log::debug!("food {} available={}", updated.id, updated.available);
    Ok(updated)
}

/// Delete by id; returns the id to drop from the collection
pub async fn delete_food<A: FoodApi + ?Sized>(api: &A, id: u32) -> SyncResult<u32> {
    api.delete_food(id).await?;
    log::debug!("deleted food {}", id);
    Ok(id)
}
