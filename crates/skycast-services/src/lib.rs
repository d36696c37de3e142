pub mod favorites;

pub use favorites::{FavoritesError, FavoritesStore};
