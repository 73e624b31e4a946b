use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::Error;
use crate::storage::LikesStore;

/// A recipe the user bookmarked, persisted independently of session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
}

/// The persisted set of liked recipes, at most one entry per recipe id.
/// Insertion order is kept for display; a separate id index gives O(1)
/// membership tests. Every mutation re-saves the whole set.
pub struct Likes {
    entries: Vec<LikedRecipe>,
    ids: HashSet<String>,
    store: Box<dyn LikesStore>,
}

impl Likes {
    /// Rehydrate the set from durable storage.
    pub fn new(store: Box<dyn LikesStore>) -> Result<Self, Error> {
        let entries = store.load()?;
        let ids = entries.iter().map(|like| like.id.clone()).collect();
        Ok(Self {
            entries,
            ids,
            store,
        })
    }

    /// Insert a liked recipe unless its id is already present, then persist.
    /// Returns the stored record either way.
    pub fn add_like(&mut self, like: LikedRecipe) -> Result<&LikedRecipe, Error> {
        if !self.ids.contains(&like.id) {
            self.ids.insert(like.id.clone());
            self.entries.push(like);
            self.persist()?;
            let index = self.entries.len() - 1;
            return Ok(&self.entries[index]);
        }

        // Duplicate add: hand back the entry stored earlier.
        let id = like.id;
        self.entries
            .iter()
            .find(|stored| stored.id == id)
            .ok_or_else(|| Error::not_found("liked recipe", id))
    }

    /// Remove by id and persist. Unknown ids are an error.
    pub fn delete_like(&mut self, id: &str) -> Result<(), Error> {
        if !self.ids.remove(id) {
            return Err(Error::not_found("liked recipe", id));
        }
        self.entries.retain(|like| like.id != id);
        self.persist()
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn num_likes(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LikedRecipe> {
        self.entries.iter()
    }

    fn persist(&self) -> Result<(), Error> {
        self.store.save(&self.entries)
    }
}
