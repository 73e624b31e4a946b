use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::Error;

/// Opaque identifier of a shopping-list item, unique within a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry the user intends to purchase, independent of its source recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub count: Option<f64>,
    pub unit: String,
    pub name: String,
    pub checked: bool,
}

/// An ordered shopping list that exclusively owns its items
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item with a freshly generated id.
    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: impl Into<String>,
        name: impl Into<String>,
    ) -> &ShoppingItem {
        let index = self.items.len();
        self.items.push(ShoppingItem {
            id: ItemId::generate(),
            count,
            unit: unit.into(),
            name: name.into(),
            checked: false,
        });
        &self.items[index]
    }

    /// Remove an item by id. Unknown ids are an error rather than a silent
    /// no-op: they can only come from a stale view.
    pub fn delete_item(&mut self, id: ItemId) -> Result<(), Error> {
        let position = self.position(id)?;
        self.items.remove(position);
        Ok(())
    }

    /// Set the quantity of an item. Negative input clamps to zero.
    pub fn update_count(&mut self, id: ItemId, new_count: f64) -> Result<(), Error> {
        let position = self.position(id)?;
        self.items[position].count = Some(new_count.max(0.0));
        Ok(())
    }

    /// Flip the checked-off state of an item, returning the new state.
    pub fn toggle_checked(&mut self, id: ItemId) -> Result<bool, Error> {
        let position = self.position(id)?;
        let item = &mut self.items[position];
        item.checked = !item.checked;
        Ok(item.checked)
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ShoppingItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ItemId) -> Result<usize, Error> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| Error::not_found("shopping item", id.to_string()))
    }
}
