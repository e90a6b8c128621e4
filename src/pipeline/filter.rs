use serde::Deserialize;
use tracing::debug;

use crate::types::FundRecord;

/// Exclusive bounds a fund must satisfy to be selected. All bounds are ANDed.
///
/// The default yield window (`> 0.7` and `< 0.25`) is empty, so the defaults
/// select nothing. They are kept as published; override them in the
/// `[filter]` section of the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub min_dividend_yield: f64,
    pub max_dividend_yield: f64,
    pub min_price_to_book: f64,
    pub max_price_to_book: f64,
    pub min_liquidity: f64,
    pub min_market_value: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_dividend_yield: 0.7,
            max_dividend_yield: 0.25,
            min_price_to_book: 0.5,
            max_price_to_book: 1.1,
            min_liquidity: 1_000_000.0,
            min_market_value: 1_000_000_000.0,
        }
    }
}

impl FilterCriteria {
    pub fn matches(&self, fund: &FundRecord) -> bool {
        fund.dividend_yield > self.min_dividend_yield
            && fund.dividend_yield < self.max_dividend_yield
            && fund.price_to_book > self.min_price_to_book
            && fund.price_to_book < self.max_price_to_book
            && fund.liquidity > self.min_liquidity
            && fund.market_value > self.min_market_value
    }

    /// True when no record can ever satisfy the bounds
    pub fn is_unsatisfiable(&self) -> bool {
        self.min_dividend_yield >= self.max_dividend_yield
            || self.min_price_to_book >= self.max_price_to_book
    }
}

/// Keep the funds that satisfy every bound, preserving input order
pub fn apply_filters(funds: Vec<FundRecord>, criteria: &FilterCriteria) -> Vec<FundRecord> {
    funds
        .into_iter()
        .filter(|fund| {
            let keep = criteria.matches(fund);
            if !keep {
                debug!(ticker = %fund.ticker, "filtered out");
            }
            keep
        })
        .collect()
}
