use log::debug;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Error;
use crate::models::likes::LikedRecipe;

/// Durable storage for the liked-recipes set. Loaded once at startup,
/// overwritten wholesale on every mutation.
pub trait LikesStore {
    fn load(&self) -> Result<Vec<LikedRecipe>, Error>;
    fn save(&self, likes: &[LikedRecipe]) -> Result<(), Error>;
}

/// Persists the set as a JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LikesStore for JsonFileStore {
    fn load(&self) -> Result<Vec<LikedRecipe>, Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path)?;
        let likes = serde_json::from_str(&text)?;
        debug!("loaded likes from {}", self.path.display());
        Ok(likes)
    }

    fn save(&self, likes: &[LikedRecipe]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(likes)?;
        fs::write(&self.path, text)?;
        debug!("saved {} likes to {}", likes.len(), self.path.display());
        Ok(())
    }
}

/// In-memory store, for tests and for running without persistence
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<LikedRecipe>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LikesStore for MemoryStore {
    fn load(&self) -> Result<Vec<LikedRecipe>, Error> {
        Ok(self.entries.lock().map(|e| e.clone()).unwrap_or_default())
    }

    fn save(&self, likes: &[LikedRecipe]) -> Result<(), Error> {
        if let Ok(mut entries) = self.entries.lock() {
            *entries = likes.to_vec();
        }
        Ok(())
    }
}
