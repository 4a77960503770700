//! HTTP Foods Client
//!
//! `reqwest` client for the foods collection. On wasm32 requests go through
//! the browser's fetch.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{ApiError, ApiResult, FoodApi};
use crate::models::{Food, NewFood};

const FOODS_ENDPOINT: &str = "foods";

#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    client: Client,
    base_url: String,
}

impl HttpFoodApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn food_url(&self, id: u32) -> String {
        self.build_url(&format!("{}/{}", FOODS_ENDPOINT, id))
    }

    async fn handle_response_status(response: Response) -> ApiResult<Response> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<Food>> {
        let response = self.client.get(self.build_url(FOODS_ENDPOINT)).send().await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create_food(&self, food: &NewFood) -> ApiResult<Food> {
        let response = self
            .client
            .post(self.build_url(FOODS_ENDPOINT))
            .json(food)
            .send()
            .await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }

    async fn update_food(&self, id: u32, food: &Food) -> ApiResult<Food> {
        let response = self.client.put(self.food_url(id)).json(food).send().await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        let response = self.client.delete(self.food_url(id)).send().await?;
        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_with_single_slash() {
        let api = HttpFoodApi::new("http://localhost:3333/");
        assert_eq!(api.build_url("/foods"), "http://localhost:3333/foods");
        assert_eq!(api.build_url("foods"), "http://localhost:3333/foods");
    }

    #[test]
    fn test_food_url() {
        let api = HttpFoodApi::new("https://api.example.com/v1");
        assert_eq!(api.food_url(7), "https://api.example.com/v1/foods/7");
    }
}
