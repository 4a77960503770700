//! Frontend Models
//!
//! Data structures matching the `/foods` REST resource.

use serde::{Deserialize, Serialize};

/// Food record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub available: bool,
    pub image: String,
}

impl Food {
    /// Shallow merge: every field present in `patch` overrides this record.
    pub fn merged_with(&self, patch: &FoodPatch) -> Food {
        Food {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            price: patch.price.clone().unwrap_or_else(|| self.price.clone()),
            available: patch.available.unwrap_or(self.available),
            image: patch.image.clone().unwrap_or_else(|| self.image.clone()),
        }
    }

    /// Same record with availability flipped
    pub fn with_available_toggled(&self) -> Food {
        Food {
            available: !self.available,
            ..self.clone()
        }
    }
}

/// Form contents of the add/edit modals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl From<&Food> for FoodDraft {
    fn from(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price.clone(),
            image: food.image.clone(),
        }
    }
}

/// Editable text fields of a draft, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Image,
    Name,
    Price,
    Description,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Image,
        DraftField::Name,
        DraftField::Price,
        DraftField::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Image => "image",
            DraftField::Name => "name",
            DraftField::Price => "price",
            DraftField::Description => "description",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Image => "Paste the image link here",
            DraftField::Name => "Ex: Italian style",
            DraftField::Price => "Ex: 19.90",
            DraftField::Description => "Description",
        }
    }

    pub fn get<'a>(&self, draft: &'a FoodDraft) -> &'a str {
        match self {
            DraftField::Image => &draft.image,
            DraftField::Name => &draft.name,
            DraftField::Price => &draft.price,
            DraftField::Description => &draft.description,
        }
    }

    pub fn set(&self, draft: &mut FoodDraft, value: String) {
        match self {
            DraftField::Image => draft.image = value,
            DraftField::Name => draft.name = value,
            DraftField::Price => draft.price = value,
            DraftField::Description => draft.description = value,
        }
    }
}

/// Create request body; never carries an id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: String,
    pub available: bool,
    pub image: String,
}

impl From<FoodDraft> for NewFood {
    fn from(draft: FoodDraft) -> Self {
        Self {
            name: draft.name,
            description: draft.description,
            price: draft.price,
            available: true,
            image: draft.image,
        }
    }
}

/// Submitted edit fields. `None` leaves the base record's value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

impl From<FoodDraft> for FoodPatch {
    fn from(draft: FoodDraft) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            price: Some(draft.price),
            available: None,
            image: Some(draft.image),
        }
    }
}

#[cfg(test)]
pub(crate) fn make_food(id: u32, name: &str, price: &str) -> Food {
    Food {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        price: price.to_string(),
        available: true,
        image: format!("{}.png", name.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_only_patched_fields() {
        let mut cake = make_food(1, "Cake", "10.00");
        cake.available = false;

        let merged = cake.merged_with(&FoodPatch {
            name: Some("Cheesecake".to_string()),
            ..Default::default()
        });

        assert_eq!(merged.id, 1);
        assert_eq!(merged.name, "Cheesecake");
        assert_eq!(merged.price, cake.price);
        assert_eq!(merged.description, cake.description);
        assert_eq!(merged.image, cake.image);
        assert!(!merged.available);
    }

    #[test]
    fn test_full_draft_patch_keeps_availability() {
        let mut cake = make_food(1, "Cake", "10.00");
        cake.available = false;

        let mut draft = FoodDraft::from(&cake);
        draft.price = "12.00".to_string();
        let merged = cake.merged_with(&FoodPatch::from(draft));

        assert_eq!(merged.price, "12.00");
        assert!(!merged.available);
    }

    #[test]
    fn test_new_food_forces_available_and_omits_id() {
        let draft = FoodDraft {
            name: "Pie".to_string(),
            description: String::new(),
            price: "10.00".to_string(),
            image: "x.png".to_string(),
        };

        let body = serde_json::to_value(NewFood::from(draft)).unwrap();
        assert_eq!(body["available"], serde_json::json!(true));
        assert_eq!(body["name"], serde_json::json!("Pie"));
        assert!(body.get("id").is_none());
    }

    #[test]
    fn test_food_deserializes_backend_json() {
        let json = r#"{"id":1,"name":"Cake","description":"Sweet","price":"19.90","available":true,"image":"cake.png"}"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.id, 1);
        assert_eq!(food.price, "19.90");
    }

    #[test]
    fn test_draft_field_accessors() {
        let mut draft = FoodDraft::default();
        for (i, field) in DraftField::ALL.iter().enumerate() {
            field.set(&mut draft, i.to_string());
        }
        assert_eq!(draft.image, "0");
        assert_eq!(draft.name, "1");
        assert_eq!(DraftField::Price.get(&draft), "2");
        assert_eq!(DraftField::Description.get(&draft), "3");
    }
}
