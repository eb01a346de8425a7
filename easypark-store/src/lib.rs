pub mod app_config;
pub mod inventory;

pub use app_config::Config;
pub use inventory::{InventoryError, InventoryStore};
