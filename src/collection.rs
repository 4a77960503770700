//! Collection Utilities
//!
//! In-place edits of the ordered food list. Backend order is kept as-is.

use crate::models::Food;

/// Append a backend-returned food to the end of the list
pub fn append_food(foods: &mut Vec<Food>, food: Food) {
    foods.push(food);
}

/// Substitute the element with the same id. No-op when the id is absent.
pub fn replace_food(foods: &mut [Food], updated: Food) {
    if let Some(food) = foods.iter_mut().find(|food| food.id == updated.id) {
        *food = updated;
    }
}

/// Drop the element with `id`, keeping the order of the rest
pub fn remove_food(foods: &mut Vec<Food>, id: u32) {
    foods.retain(|food| food.id != id);
}
