use std::path::Path;

use crate::common::error::Result;
use crate::types::ScoredFund;

/// Blocking HTTP GET. Implementations return the response whatever its
/// status; the caller decides what counts as failure.
pub trait HttpClientPort {
    fn get(&self, url: &str) -> Result<HttpGetResult>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub status: u16,
    pub body: String,
    pub content_type: String,
}

impl HttpGetResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Destination for the ranked report
pub trait ReportWriterPort {
    fn write_report(&self, path: &Path, ranked: &[ScoredFund], top: &[ScoredFund]) -> Result<()>;
}
