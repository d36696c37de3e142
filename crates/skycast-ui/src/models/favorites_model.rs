//! Screen state for the favorites list. Thin wrapper over the
//! file-backed store; mutations write through immediately.

use std::path::PathBuf;

use skycast_services::FavoritesStore;

#[derive(Debug)]
pub struct FavoritesModel {
    store: FavoritesStore,
}

impl FavoritesModel {
    pub fn new(store: FavoritesStore) -> Self {
        Self { store }
    }

    /// Hydrate the model from the favorites file at `path`.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        Self::new(FavoritesStore::load(path))
    }

    pub fn favorites(&self) -> &[String] {
        self.store.cities()
    }

    pub fn is_favorite(&self, city: &str) -> bool {
        self.store.contains(city)
    }

    pub fn add(&mut self, city: &str) {
        self.store.add(city);
    }

    pub fn remove(&mut self, city: &str) {
        self.store.remove(city);
    }

    /// Flip the favorite state of a city. Returns whether it is now
    /// favorited.
    pub fn toggle(&mut self, city: &str) -> bool {
        if self.store.contains(city) {
            self.store.remove(city);
            false
        } else {
            self.store.add(city);
            true
        }
    }
}
