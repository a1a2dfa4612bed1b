pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::menu::{Menu, MenuChoice};
pub use config::{cli::LocalStorage, toml_config::CatalogConfig, CliConfig};
pub use crate::core::catalog::ActivityCatalog;
pub use domain::model::{Activity, Location};
pub use utils::error::{CatalogError, Result};
