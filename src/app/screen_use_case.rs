use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::app::ports::{HttpClientPort, ReportWriterPort};
use crate::common::error::{Result, ScreenerError};
use crate::config::ScreenerConfig;
use crate::pipeline::filter::apply_filters;
use crate::pipeline::normalize::normalize_table;
use crate::pipeline::parser::parse_table;
use crate::pipeline::rank::{rank_funds, top_by_segment};
use crate::pipeline::score::score_funds;
use crate::types::ScoredFund;

/// Result of one screening run
#[derive(Debug, Clone, Serialize)]
pub struct ScreenOutcome {
    pub generated_at: DateTime<Local>,
    pub source_url: String,
    /// Funds listed on the source page
    pub listed: usize,
    /// Funds ranked by score then yield; empty when nothing passed the filter
    pub ranked: Vec<ScoredFund>,
    /// Best funds of each segment, grouped by segment
    pub top_by_segment: Vec<ScoredFund>,
    /// Where the workbook was written, if one was written
    pub report_path: Option<PathBuf>,
}

impl ScreenOutcome {
    pub fn selected(&self) -> usize {
        self.ranked.len()
    }

    /// Write the outcome as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        info!("Wrote run summary to {}", path.display());
        Ok(())
    }
}

/// Fetch -> parse -> normalize -> filter -> score -> rank -> report
pub struct ScreenUseCase {
    http: Box<dyn HttpClientPort>,
    report: Box<dyn ReportWriterPort>,
    config: ScreenerConfig,
}

impl ScreenUseCase {
    pub fn new(
        http: Box<dyn HttpClientPort>,
        report: Box<dyn ReportWriterPort>,
        config: ScreenerConfig,
    ) -> Self {
        Self { http, report, config }
    }

    fn fetch_page(&self) -> Result<String> {
        let url = &self.config.source.url;
        let response = self.http.get(url)?;
        if !response.is_success() {
            return Err(ScreenerError::HttpStatus {
                status: response.status,
                url: url.clone(),
            });
        }
        info!(
            "Fetched {} ({} bytes, {})",
            url,
            response.body.len(),
            response.content_type
        );
        Ok(response.body)
    }

    #[instrument(skip(self), fields(url = %self.config.source.url))]
    pub fn run(&self) -> Result<ScreenOutcome> {
        let html = self.fetch_page()?;
        let table = parse_table(&html, &self.config.source.table_id)?;
        let funds = normalize_table(&table)?;
        let listed = funds.len();

        let criteria = &self.config.filter;
        if criteria.is_unsatisfiable() {
            warn!(?criteria, "filter bounds cannot be satisfied; no fund will be selected");
        }
        let selected = apply_filters(funds, criteria);
        info!("{} of {} funds passed the filter", selected.len(), listed);

        let mut outcome = ScreenOutcome {
            generated_at: Local::now(),
            source_url: self.config.source.url.clone(),
            listed,
            ranked: Vec::new(),
            top_by_segment: Vec::new(),
            report_path: None,
        };
        if selected.is_empty() {
            return Ok(outcome);
        }

        let mut ranked = score_funds(selected);
        rank_funds(&mut ranked);
        let top = top_by_segment(&ranked, self.config.report.top_n);

        let output = &self.config.report.output;
        if output.exists() {
            warn!("Output file '{}' already exists and will be overwritten", output.display());
        }
        self.report.write_report(output, &ranked, &top)?;
        info!("Report written to {}", output.display());

        outcome.ranked = ranked;
        outcome.top_by_segment = top;
        outcome.report_path = Some(output.clone());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::HttpGetResult;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct CannedHttp {
        status: u16,
        body: String,
    }

    impl HttpClientPort for CannedHttp {
        fn get(&self, _url: &str) -> Result<HttpGetResult> {
            Ok(HttpGetResult {
                status: self.status,
                body: self.body.clone(),
                content_type: "text/html".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingReport {
        calls: Rc<RefCell<Vec<(usize, usize)>>>,
    }

    impl ReportWriterPort for RecordingReport {
        fn write_report(&self, _path: &Path, ranked: &[ScoredFund], top: &[ScoredFund]) -> Result<()> {
            self.calls.borrow_mut().push((ranked.len(), top.len()));
            Ok(())
        }
    }

    const PAGE: &str = r#"<table id="tabelaResultado">
        <tr><th>Papel</th><th>Segmento</th><th>Dividend Yield</th><th>P/VP</th>
            <th>Valor de Mercado</th><th>Liquidez</th><th>Qtd de imóveis</th><th>Vacância Média</th></tr>
        <tr><td>AAAA11</td><td>Logística</td><td>13,00%</td><td>0,82</td>
            <td>2.100.000.000</td><td>6.000.000</td><td>10</td><td>3,00%</td></tr>
        <tr><td>BBBB11</td><td>Logística</td><td>9,00%</td><td>1,30</td>
            <td>2.100.000.000</td><td>6.000.000</td><td>10</td><td>3,00%</td></tr>
    </table>"#;

    fn use_case(status: u16, config: ScreenerConfig) -> (ScreenUseCase, Rc<RefCell<Vec<(usize, usize)>>>) {
        let report = RecordingReport::default();
        let calls = report.calls.clone();
        let http = CannedHttp { status, body: PAGE.to_string() };
        (ScreenUseCase::new(Box::new(http), Box::new(report), config), calls)
    }

    fn consistent_config(dir: &Path) -> ScreenerConfig {
        let mut config = ScreenerConfig::default();
        config.filter.min_dividend_yield = 0.07;
        config.report.output = dir.join("report.xlsx");
        config
    }

    #[test]
    fn test_default_bounds_select_nothing_and_skip_report() {
        let (use_case, calls) = use_case(200, ScreenerConfig::default());
        let outcome = use_case.run().unwrap();
        assert_eq!(outcome.listed, 2);
        assert_eq!(outcome.selected(), 0);
        assert!(outcome.report_path.is_none());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_consistent_bounds_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let (use_case, calls) = use_case(200, consistent_config(dir.path()));
        let outcome = use_case.run().unwrap();

        assert_eq!(outcome.selected(), 1);
        assert_eq!(outcome.ranked[0].fund.ticker, "AAAA11");
        assert_eq!(outcome.ranked[0].score, 8);
        assert_eq!(outcome.report_path, Some(dir.path().join("report.xlsx")));
        assert_eq!(*calls.borrow(), vec![(1, 1)]);
    }

    #[test]
    fn test_non_success_status_aborts() {
        let (use_case, calls) = use_case(503, ScreenerConfig::default());
        match use_case.run().unwrap_err() {
            ScreenerError::HttpStatus { status, url } => {
                assert_eq!(status, 503);
                assert_eq!(url, crate::common::constants::FUNDAMENTUS_FII_URL);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_summary_json_round_trips_counts() {
        let dir = tempfile::tempdir().unwrap();
        let (use_case, _) = use_case(200, consistent_config(dir.path()));
        let outcome = use_case.run().unwrap();

        let json_path = dir.path().join("summary.json");
        outcome.write_json(&json_path).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(value["listed"], 2);
        assert_eq!(value["ranked"][0]["ticker"], "AAAA11");
        assert_eq!(value["ranked"][0]["score"], 8);
    }
}
