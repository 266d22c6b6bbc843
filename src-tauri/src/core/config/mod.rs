pub mod model;
pub mod store;

pub use model::{Config, Modpack};
pub use store::{ConfigStore, CONFIG_FILE};
