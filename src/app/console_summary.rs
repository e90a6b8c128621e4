use std::fmt;

use crate::app::screen_use_case::ScreenOutcome;
use crate::pipeline::rank::group_by_segment;

/// Human-readable summary of a run for standard output
pub struct ConsoleSummary<'a>(pub &'a ScreenOutcome);

impl fmt::Display for ConsoleSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        let Some(path) = &outcome.report_path else {
            return writeln!(
                f,
                "No fund matches the filter criteria ({} funds listed).",
                outcome.listed
            );
        };

        let shown = std::path::absolute(path).unwrap_or_else(|_| path.clone());
        writeln!(f, "Report saved to: {}", shown.display())?;
        writeln!(f, "Funds in report: {}", outcome.selected())?;

        if outcome.top_by_segment.is_empty() {
            return Ok(());
        }

        writeln!(f, "\nTop funds by segment:")?;
        for (segment, funds) in group_by_segment(&outcome.top_by_segment) {
            writeln!(f, "\nSegmento: {}", segment)?;
            writeln!(f, "{:<10} {:>4} {:>14} {:>6}", "Papel", "Nota", "Dividend Yield", "P/VP")?;
            for scored in funds {
                writeln!(
                    f,
                    "{:<10} {:>4} {:>13.2}% {:>6.2}",
                    scored.fund.ticker,
                    scored.score,
                    scored.fund.dividend_yield * 100.0,
                    scored.fund.price_to_book
                )?;
            }
        }
        Ok(())
    }
}

pub fn render(outcome: &ScreenOutcome) -> String {
    ConsoleSummary(outcome).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FundRecord, ScoredFund};
    use chrono::Local;
    use std::path::PathBuf;

    fn scored(ticker: &str, segment: &str, score: u8) -> ScoredFund {
        ScoredFund {
            fund: FundRecord {
                ticker: ticker.to_string(),
                segment: segment.to_string(),
                price: None,
                ffo_yield: None,
                dividend_yield: 0.1234,
                price_to_book: 0.876,
                market_value: 2e9,
                liquidity: 2e6,
                property_count: 1,
                cap_rate: None,
                vacancy: 0.0,
            },
            score,
        }
    }

    fn outcome(report_path: Option<PathBuf>, funds: Vec<ScoredFund>) -> ScreenOutcome {
        ScreenOutcome {
            generated_at: Local::now(),
            source_url: "http://localhost/fii".to_string(),
            listed: 40,
            ranked: funds.clone(),
            top_by_segment: funds,
            report_path,
        }
    }

    #[test]
    fn test_no_match_message() {
        let text = render(&outcome(None, Vec::new()));
        assert!(text.contains("No fund matches"));
        assert!(text.contains("40 funds listed"));
    }

    #[test]
    fn test_segments_are_listed_with_their_funds() {
        let text = render(&outcome(
            Some(PathBuf::from("/tmp/report.xlsx")),
            vec![
                scored("HGLG11", "Logística", 9),
                scored("XPML11", "Shoppings", 6),
            ],
        ));

        assert!(text.contains("Report saved to: /tmp/report.xlsx"));
        assert!(text.contains("Funds in report: 2"));
        let logistica = text.find("Segmento: Logística").unwrap();
        let shoppings = text.find("Segmento: Shoppings").unwrap();
        assert!(logistica < shoppings);
        assert!(text.contains("12.34%"));
        assert!(text.contains("0.88"));
    }

    #[test]
    fn test_display_matches_render() {
        let run = outcome(
            Some(PathBuf::from("/tmp/report.xlsx")),
            vec![scored("KNRI11", "Híbrido", 7)],
        );
        assert_eq!(format!("{}", ConsoleSummary(&run)), render(&run));
        assert!(render(&run).ends_with("\n"));
    }
}
