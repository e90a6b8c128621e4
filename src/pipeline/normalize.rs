//! Conversion of the scraped Brazilian-locale strings into typed records.
//!
//! The source page formats numbers with `.` as thousands separator and `,` as
//! decimal separator, and percentages with a trailing `%`.

use tracing::{debug, info};

use crate::common::error::{Result, ScreenerError};
use crate::pipeline::schema::{Column, FieldClass, ResolvedSchema};
use crate::types::{FundRecord, RawTable};

type ConversionResult<T> = std::result::Result<T, String>;

fn parse_plain(text: &str) -> ConversionResult<f64> {
    if text.is_empty() {
        return Err("empty value".to_string());
    }
    let value: f64 = text.parse().map_err(|_| "not a number".to_string())?;
    if !value.is_finite() {
        return Err("not a finite number".to_string());
    }
    Ok(value)
}

/// `"12,34%"` -> `0.1234`, `"1.234,5%"` -> `12.345`
pub fn parse_percentage(raw: &str) -> ConversionResult<f64> {
    let cleaned = raw.trim().replace('%', "").replace('.', "").replace(',', ".");
    Ok(parse_plain(cleaned.trim())? / 100.0)
}

/// `"0,95"` -> `0.95`
pub fn parse_decimal(raw: &str) -> ConversionResult<f64> {
    parse_plain(&raw.trim().replace(',', "."))
}

/// `"1.850,00"` -> `1850.0`
pub fn parse_grouped_decimal(raw: &str) -> ConversionResult<f64> {
    parse_plain(&raw.trim().replace('.', "").replace(',', "."))
}

/// `"1.234.567"` -> `1234567.0`
pub fn parse_grouped_number(raw: &str) -> ConversionResult<f64> {
    parse_plain(&raw.trim().replace('.', ""))
}

/// `"1.234"` -> `1234`; rejects fractions, negatives and overflow
pub fn parse_count(raw: &str) -> ConversionResult<u32> {
    let value = parse_grouped_number(raw)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err("not a whole, non-negative count".to_string());
    }
    Ok(value as u32)
}

fn convert(class: FieldClass, raw: &str) -> ConversionResult<f64> {
    match class {
        FieldClass::Percentage => parse_percentage(raw),
        FieldClass::Decimal => parse_decimal(raw),
        FieldClass::GroupedDecimal => parse_grouped_decimal(raw),
        FieldClass::Integer => parse_grouped_number(raw),
        FieldClass::Count => parse_count(raw).map(f64::from),
        FieldClass::Text => Err("text column has no numeric value".to_string()),
    }
}

/// Converts the cells of a single row, attaching row context to failures
struct RowReader<'a> {
    schema: &'a ResolvedSchema,
    row: &'a [String],
    ticker: String,
}

impl<'a> RowReader<'a> {
    fn conversion_error(&self, column: Column, value: &str, reason: String) -> ScreenerError {
        ScreenerError::Conversion {
            column: column.label().to_string(),
            ticker: self.ticker.clone(),
            value: value.to_string(),
            reason,
        }
    }

    fn text(&self, column: Column) -> Result<String> {
        self.schema
            .cell(self.row, column)
            .map(|s| s.trim().to_string())
            .ok_or_else(|| ScreenerError::MissingColumn(column.label().to_string()))
    }

    fn number(&self, column: Column) -> Result<f64> {
        let raw = self
            .schema
            .cell(self.row, column)
            .ok_or_else(|| ScreenerError::MissingColumn(column.label().to_string()))?;
        convert(column.class(), raw).map_err(|reason| self.conversion_error(column, raw, reason))
    }

    fn optional_number(&self, column: Column) -> Result<Option<f64>> {
        match self.schema.cell(self.row, column) {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => convert(column.class(), raw)
                .map(Some)
                .map_err(|reason| self.conversion_error(column, raw, reason)),
        }
    }

    fn count(&self, column: Column) -> Result<u32> {
        let raw = self
            .schema
            .cell(self.row, column)
            .ok_or_else(|| ScreenerError::MissingColumn(column.label().to_string()))?;
        parse_count(raw).map_err(|reason| self.conversion_error(column, raw, reason))
    }
}

/// Convert every row of the scraped table into a `FundRecord`.
///
/// The schema is resolved once against the header row. The first cell that
/// cannot be converted aborts the whole batch.
pub fn normalize_table(table: &RawTable) -> Result<Vec<FundRecord>> {
    let schema = ResolvedSchema::resolve(&table.headers)?;

    let mut funds = Vec::with_capacity(table.len());
    for row in &table.rows {
        let mut reader = RowReader {
            schema: &schema,
            row,
            ticker: String::new(),
        };
        reader.ticker = reader.text(Column::Ticker)?;

        let fund = FundRecord {
            ticker: reader.ticker.clone(),
            segment: reader.text(Column::Segment)?,
            price: reader.optional_number(Column::Price)?,
            ffo_yield: reader.optional_number(Column::FfoYield)?,
            dividend_yield: reader.number(Column::DividendYield)?,
            price_to_book: reader.number(Column::PriceToBook)?,
            market_value: reader.number(Column::MarketValue)?,
            liquidity: reader.number(Column::Liquidity)?,
            property_count: reader.count(Column::PropertyCount)?,
            cap_rate: reader.optional_number(Column::CapRate)?,
            vacancy: reader.number(Column::Vacancy)?,
        };
        debug!(ticker = %fund.ticker, dy = fund.dividend_yield, pvp = fund.price_to_book, "normalized");
        funds.push(fund);
    }

    info!("Normalized {} funds", funds.len());
    Ok(funds)
}
