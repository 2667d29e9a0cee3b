use serde::{Deserialize, Serialize};

/// An equipment item as listed by `GET /equipment/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Equipment {
    pub equipment_id: i64,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub total_quantity: i64,
    #[serde(default)]
    pub available_quantity: i64,
}

impl Equipment {
    pub fn is_available(&self) -> bool {
        self.available_quantity > 0
    }

    /// Category line shown under the item name.
    pub fn category_label(&self) -> String {
        match self.category_id {
            Some(id) => format!("Category ID: {id}"),
            None => "Category: General".to_string(),
        }
    }
}

/// An equipment category from `GET /equipment_category/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub category_id: i64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Filters for the equipment listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentQuery {
    pub search_term: Option<String>,
    pub category_id: Option<i64>,
}

impl EquipmentQuery {
    /// Build from raw form values; blank inputs are dropped.
    pub fn from_form(search_term: &str, category: &str) -> Self {
        let search = search_term.trim();
        Self {
            search_term: (!search.is_empty()).then(|| search.to_string()),
            category_id: category.trim().parse().ok(),
        }
    }

    /// Key/value pairs for the query string, in a stable order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(term) = &self.search_term {
            pairs.push(("search_term", term.clone()));
        }
        if let Some(id) = self.category_id {
            pairs.push(("category_id", id.to_string()));
        }
        pairs
    }
}
