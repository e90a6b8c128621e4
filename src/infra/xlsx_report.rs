use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;
use tracing::{debug, info};

use crate::app::ports::ReportWriterPort;
use crate::common::constants::{ALL_FUNDS_SHEET, REPORT_COLUMNS, TOP_BY_SEGMENT_SHEET};
use crate::common::error::Result;
use crate::types::ScoredFund;

const COLUMN_WIDTH: f64 = 17.0;
const HEADER_FILL: &str = "#4F81BD";
const HEADER_FONT: &str = "#FFFFFF";
const SCORE_HIGH_FILL: &str = "#C6EFCE";
const SCORE_MID_FILL: &str = "#FFEB9C";
const SCORE_LOW_FILL: &str = "#FFC7CE";

/// Cell formats shared by both sheets
struct ReportFormats {
    header: Format,
    text: Format,
    percent: Format,
    ratio: Format,
    thousands: Format,
    count: Format,
    score_high: Format,
    score_mid: Format,
    score_low: Format,
}

impl ReportFormats {
    fn new() -> Self {
        let cell = Format::new()
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);

        Self {
            header: cell
                .clone()
                .set_align(FormatAlign::VerticalCenter)
                .set_bold()
                .set_font_color(HEADER_FONT)
                .set_background_color(HEADER_FILL),
            percent: cell.clone().set_num_format("0.00%"),
            ratio: cell.clone().set_num_format("0.00"),
            thousands: cell.clone().set_num_format("#,##0"),
            count: cell.clone().set_num_format("0"),
            score_high: cell.clone().set_background_color(SCORE_HIGH_FILL),
            score_mid: cell.clone().set_background_color(SCORE_MID_FILL),
            score_low: cell.clone().set_background_color(SCORE_LOW_FILL),
            text: cell,
        }
    }

    /// Traffic-light fill for the score column
    fn score(&self, score: u8) -> &Format {
        if score >= 8 {
            &self.score_high
        } else if score >= 5 {
            &self.score_mid
        } else {
            &self.score_low
        }
    }
}

fn write_sheet(
    sheet: &mut Worksheet,
    name: &str,
    funds: &[ScoredFund],
    formats: &ReportFormats,
) -> Result<()> {
    sheet.set_name(name)?;

    for (col, title) in REPORT_COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *title, &formats.header)?;
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    for (index, scored) in funds.iter().enumerate() {
        let row = index as u32 + 1;
        let fund = &scored.fund;
        sheet.write_string_with_format(row, 0, &fund.ticker, &formats.text)?;
        sheet.write_string_with_format(row, 1, &fund.segment, &formats.text)?;
        sheet.write_number_with_format(row, 2, fund.dividend_yield, &formats.percent)?;
        sheet.write_number_with_format(row, 3, fund.price_to_book, &formats.ratio)?;
        sheet.write_number_with_format(row, 4, fund.market_value, &formats.thousands)?;
        sheet.write_number_with_format(row, 5, fund.liquidity, &formats.text)?;
        sheet.write_number_with_format(row, 6, f64::from(fund.property_count), &formats.count)?;
        sheet.write_number_with_format(row, 7, fund.vacancy, &formats.percent)?;
        sheet.write_number_with_format(row, 8, f64::from(scored.score), formats.score(scored.score))?;
    }

    sheet.set_freeze_panes(1, 0)?;
    debug!(sheet = name, rows = funds.len(), "sheet written");
    Ok(())
}

/// Writes the two-sheet Excel report
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxReportWriter;

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriterPort for XlsxReportWriter {
    fn write_report(&self, path: &Path, ranked: &[ScoredFund], top: &[ScoredFund]) -> Result<()> {
        let formats = ReportFormats::new();
        let mut workbook = Workbook::new();

        write_sheet(workbook.add_worksheet(), ALL_FUNDS_SHEET, ranked, &formats)?;
        write_sheet(workbook.add_worksheet(), TOP_BY_SEGMENT_SHEET, top, &formats)?;

        // The workbook is built in memory; save writes the file in one go.
        workbook.save(path)?;
        info!(
            "Saved workbook {} ({} funds, {} in top view)",
            path.display(),
            ranked.len(),
            top.len()
        );
        Ok(())
    }
}
