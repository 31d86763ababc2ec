//! Declarative list rendering.
//!
//! `ListView::render` turns the fetched records into view data. Each item
//! carries its controls as `Action` values keyed by the record id, so the host
//! dispatches through `App::dispatch` instead of wiring handlers per redraw.

use crate::types::{Food, FoodId};

pub const EDIT_LABEL: &str = "Edit";
pub const DELETE_LABEL: &str = "Delete";

/// What a per-item control does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Edit(FoodId),
    Delete(FoodId),
}

impl Action {
    pub fn id(&self) -> &FoodId {
        match self {
            Action::Edit(id) | Action::Delete(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub action: Action,
}

/// One rendered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    pub key: FoodId,
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub edit: Control,
    pub delete: Control,
}

impl From<&Food> for FoodItem {
    fn from(food: &Food) -> Self {
        Self {
            key: food.id.clone(),
            image_url: food.image_url.clone(),
            name: food.name.clone(),
            description: food.description.clone(),
            edit: Control {
                label: EDIT_LABEL,
                action: Action::Edit(food.id.clone()),
            },
            delete: Control {
                label: DELETE_LABEL,
                action: Action::Delete(food.id.clone()),
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListView {
    items: Vec<FoodItem>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full replace: previous items are dropped before the new ones are drawn,
    /// in input order.
    pub fn render(&mut self, foods: &[Food]) {
        self.items.clear();
        self.items.extend(foods.iter().map(FoodItem::from));
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a 1-based position, the way the terminal numbers them.
    pub fn at_position(&self, position: usize) -> Option<&FoodItem> {
        position.checked_sub(1).and_then(|i| self.items.get(i))
    }
}
