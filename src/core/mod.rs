pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{BatchPayload, Record, SubmitOutcome, SyncReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
