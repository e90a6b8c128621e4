//! Screens Brazilian real-estate investment funds (FIIs) listed on
//! Fundamentus and writes a ranked Excel report.

pub mod app;
pub mod common;
pub mod config;
pub mod infra;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use app::screen_use_case::{ScreenOutcome, ScreenUseCase};
pub use common::error::{Result, ScreenerError};
pub use config::ScreenerConfig;
pub use types::{FundRecord, RawTable, ScoredFund};
