pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::config::SyncConfig;
pub use crate::core::{etl::SyncEngine, pipeline::ContactSyncPipeline};
pub use crate::domain::model::{SubmitOutcome, SyncReport};
pub use crate::utils::error::{Result, Stage, SyncError};
