pub mod favorites_model;
pub mod weather_model;

pub use favorites_model::FavoritesModel;
pub use weather_model::{FetchRequest, WeatherModel};
