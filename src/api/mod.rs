//! Foods REST API
//!
//! Frontend bindings to the `/foods` collection, behind a trait so the sync
//! layer can run against any backend.

mod client;
pub mod error;

use async_trait::async_trait;

use crate::models::{Food, NewFood};

pub use client::HttpFoodApi;
pub use error::{ApiError, ApiResult};

/// The four calls the dashboard makes against the foods collection
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list_foods(&self) -> ApiResult<Vec<Food>>;

    /// `POST /foods`
    async fn create_food(&self, food: &NewFood) -> ApiResult<Food>;

    /// `PUT /foods/{id}`
    async fn update_food(&self, id: u32, food: &Food) -> ApiResult<Food>;

    /// `DELETE /foods/{id}`, response body ignored
    async fn delete_food(&self, id: u32) -> ApiResult<()>;
}
