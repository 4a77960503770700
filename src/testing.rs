//! In-memory foods backend for tests.
//!
//! Behaves like the mock REST server the dashboard is developed against:
//! ids are assigned on create, PUT bodies are echoed, unknown ids are 404.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::{ApiError, ApiResult, FoodApi};
use crate::models::{Food, NewFood};

/// One request received by [`InMemoryFoodApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List,
    Create(NewFood),
    Update(u32, Food),
    Delete(u32),
}

#[derive(Default)]
pub struct InMemoryFoodApi {
    foods: RefCell<Vec<Food>>,
    next_id: Cell<u32>,
    failing: Cell<bool>,
    requests: RefCell<Vec<Request>>,
}

impl InMemoryFoodApi {
    pub fn with_foods(foods: Vec<Food>) -> Self {
        let next_id = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self {
            foods: RefCell::new(foods),
            next_id: Cell::new(next_id),
            ..Default::default()
        }
    }

    /// Make every following request fail with a 500
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn stored(&self) -> Vec<Food> {
        self.foods.borrow().clone()
    }

    fn record(&self, request: Request) -> ApiResult<()> {
        self.requests.borrow_mut().push(request);
        if self.failing.get() {
            return Err(ApiError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }

    fn not_found() -> ApiError {
        ApiError::Http {
            status: 404,
            message: "Not Found".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl FoodApi for InMemoryFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<Food>> {
        self.record(Request::List)?;
        Ok(self.stored())
    }

    async fn create_food(&self, food: &NewFood) -> ApiResult<Food> {
        self.record(Request::Create(food.clone()))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = Food {
            id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price.clone(),
            available: food.available,
            image: food.image.clone(),
        };
        self.foods.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_food(&self, id: u32, food: &Food) -> ApiResult<Food> {
        self.record(Request::Update(id, food.clone()))?;
        let mut foods = self.foods.borrow_mut();
        let stored = foods
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(Self::not_found)?;
        *stored = Food { id, ..food.clone() };
        Ok(stored.clone())
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        self.record(Request::Delete(id))?;
        let mut foods = self.foods.borrow_mut();
        let before = foods.len();
        foods.retain(|f| f.id != id);
        if foods.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}
