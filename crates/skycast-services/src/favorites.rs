//! File-backed favorites list.
//!
//! An ordered, duplicate-free list of city names persisted as a JSON array
//! of strings in a single file. The in-memory copy is authoritative;
//! mutations that change the list write through to disk immediately, and a
//! failed write is logged without blocking the UI.

use std::path::{Path, PathBuf};

/// Favorites persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("Failed to write favorites: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to encode favorites: {0}")]
    EncodeFailed(#[from] serde_json::Error),
}

/// Ordered list of favorited city names with write-through persistence.
///
/// Uniqueness is enforced on insert with a case-sensitive exact match on
/// the trimmed city string. Single in-memory copy, single writer.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    cities: Vec<String>,
}

impl FavoritesStore {
    /// Hydrate the store from the given file.
    ///
    /// A missing file yields an empty list; an unreadable or corrupt file
    /// yields an empty list with a logged warning (the next save
    /// overwrites it).
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cities = read_cities(&path);
        tracing::debug!("Loaded {} favorite(s) from {}", cities.len(), path.display());
        Self { path, cities }
    }

    /// Add a city to the favorites. Idempotent: a no-op when the city is
    /// already present or empty after trimming.
    pub fn add(&mut self, city: &str) {
        let city = city.trim();
        if city.is_empty() {
            return;
        }
        if self.cities.iter().any(|c| c == city) {
            tracing::debug!("'{}' is already a favorite", city);
            return;
        }

        self.cities.push(city.to_string());
        self.persist();
    }

    /// Remove a city from the favorites. Idempotent: a no-op when absent.
    pub fn remove(&mut self, city: &str) {
        let city = city.trim();
        let before = self.cities.len();
        self.cities.retain(|c| c != city);
        if self.cities.len() != before {
            self.persist();
        }
    }

    /// Whether a city is currently favorited (case-sensitive exact match).
    pub fn contains(&self, city: &str) -> bool {
        let city = city.trim();
        self.cities.iter().any(|c| c == city)
    }

    /// The favorites, in insertion order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Write the list to disk as a JSON array of strings.
    pub fn save(&self) -> Result<(), FavoritesError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.cities)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    // Write-through after a mutation. Persistence failure must not block
    // the UI; the in-memory list stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("Failed to persist favorites to {}: {}", self.path.display(), e);
        }
    }
}

fn read_cities(path: &Path) -> Vec<String> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            tracing::warn!("Failed to read favorites from {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    if contents.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(&contents) {
        Ok(cities) => cities,
        Err(e) => {
            tracing::warn!(
                "Favorites file {} is corrupt ({}); starting with an empty list",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}
