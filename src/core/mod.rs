pub mod catalog;
pub mod export;

pub use crate::domain::model::{Activity, Location};
pub use crate::domain::ports::{ConfigProvider, ExportSink};
pub use crate::utils::error::Result;
