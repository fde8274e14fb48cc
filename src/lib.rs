pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{
    civic::CivicInfoClient, roster::RosterReader, storage::LocalStorage,
    template::TeraLetterRenderer,
};
pub use config::CliConfig;
pub use core::{
    etl::EtlEngine,
    pipeline::{LetterPipeline, PipelineState, RunSummary},
};
pub use domain::normalize::{clean_phone_number, clean_zipcode};
pub use domain::services::FALLBACK_MESSAGE;
pub use domain::stats::{most_frequent, PopularityReport, RegistrationStats};
pub use utils::error::{EtlError, Result};
