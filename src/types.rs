use serde::{Deserialize, Serialize};

/// Header row and data rows of the scraped table, all cells as trimmed text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One listed fund with every metric converted to its numeric type.
///
/// Ratios (yields, cap rate, vacancy) are fractions, so `0.1234` means 12.34%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    pub ticker: String,
    pub segment: String,
    pub price: Option<f64>,
    pub ffo_yield: Option<f64>,
    pub dividend_yield: f64,
    pub price_to_book: f64,
    pub market_value: f64,
    pub liquidity: f64,
    pub property_count: u32,
    pub cap_rate: Option<f64>,
    pub vacancy: f64,
}

/// A fund that passed the filter, together with its 0-10 score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFund {
    #[serde(flatten)]
    pub fund: FundRecord,
    pub score: u8,
}
