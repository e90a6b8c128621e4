use crate::common::constants::MAX_SCORE;
use crate::types::{FundRecord, ScoredFund};

/// Two-step threshold: `full` earns 2 points, `partial` earns 1
struct Threshold {
    full: f64,
    partial: f64,
}

const DIVIDEND_YIELD: Threshold = Threshold { full: 0.14, partial: 0.12 };
const PRICE_TO_BOOK: Threshold = Threshold { full: 0.80, partial: 0.85 };
const LIQUIDITY: Threshold = Threshold { full: 5_000_000.0, partial: 2_000_000.0 };
const MARKET_VALUE: Threshold = Threshold { full: 2_000_000_000.0, partial: 1_500_000_000.0 };
const VACANCY: Threshold = Threshold { full: 0.05, partial: 0.10 };

impl Threshold {
    fn higher_is_better(&self, value: f64) -> u8 {
        if value >= self.full {
            2
        } else if value >= self.partial {
            1
        } else {
            0
        }
    }

    fn lower_is_better(&self, value: f64) -> u8 {
        if value <= self.full {
            2
        } else if value <= self.partial {
            1
        } else {
            0
        }
    }
}

/// Score a fund from 0 to 10
pub fn calculate_score(fund: &FundRecord) -> u8 {
    let score = DIVIDEND_YIELD.higher_is_better(fund.dividend_yield)
        + PRICE_TO_BOOK.lower_is_better(fund.price_to_book)
        + LIQUIDITY.higher_is_better(fund.liquidity)
        + MARKET_VALUE.higher_is_better(fund.market_value)
        + VACANCY.lower_is_better(fund.vacancy);
    score.min(MAX_SCORE)
}

pub fn score_funds(funds: Vec<FundRecord>) -> Vec<ScoredFund> {
    funds
        .into_iter()
        .map(|fund| {
            let score = calculate_score(&fund);
            ScoredFund { fund, score }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> FundRecord {
        FundRecord {
            ticker: "TEST11".to_string(),
            segment: "Lajes Corporativas".to_string(),
            price: Some(100.0),
            ffo_yield: None,
            dividend_yield: 0.10,
            price_to_book: 0.95,
            market_value: 1_200_000_000.0,
            liquidity: 1_500_000.0,
            property_count: 3,
            cap_rate: None,
            vacancy: 0.20,
        }
    }

    #[test]
    fn test_floor_and_ceiling() {
        assert_eq!(calculate_score(&base()), 0);

        let best = FundRecord {
            dividend_yield: 0.15,
            price_to_book: 0.70,
            liquidity: 9_000_000.0,
            market_value: 3_000_000_000.0,
            vacancy: 0.0,
            ..base()
        };
        assert_eq!(calculate_score(&best), 10);
    }

    #[test]
    fn test_threshold_edges_are_inclusive() {
        let partial = FundRecord {
            dividend_yield: 0.12,
            price_to_book: 0.85,
            liquidity: 2_000_000.0,
            market_value: 1_500_000_000.0,
            vacancy: 0.10,
            ..base()
        };
        assert_eq!(calculate_score(&partial), 5);

        let full = FundRecord {
            dividend_yield: 0.14,
            price_to_book: 0.80,
            liquidity: 5_000_000.0,
            market_value: 2_000_000_000.0,
            vacancy: 0.05,
            ..base()
        };
        assert_eq!(calculate_score(&full), 10);
    }

    #[test]
    fn test_each_metric_contributes_independently() {
        let cases: Vec<(FundRecord, u8)> = vec![
            (FundRecord { dividend_yield: 0.13, ..base() }, 1),
            (FundRecord { price_to_book: 0.79, ..base() }, 2),
            (FundRecord { liquidity: 2_500_000.0, ..base() }, 1),
            (FundRecord { market_value: 2_100_000_000.0, ..base() }, 2),
            (FundRecord { vacancy: 0.08, ..base() }, 1),
        ];
        for (fund, expected) in cases {
            assert_eq!(calculate_score(&fund), expected);
        }
    }

    #[test]
    fn test_improving_a_metric_never_lowers_score() {
        let yields = [0.0, 0.11, 0.12, 0.13, 0.14, 0.5];
        let pvps = [1.5, 0.9, 0.85, 0.82, 0.80, 0.3];
        let liquidity = [0.0, 1_999_999.0, 2_000_000.0, 4_999_999.0, 5_000_000.0, 1e9];
        let market_values = [0.0, 1.4e9, 1.5e9, 1.9e9, 2.0e9, 5.0e10];
        let vacancies = [0.9, 0.11, 0.10, 0.07, 0.05, 0.0];

        let mut last = 0;
        for dy in yields {
            let s = calculate_score(&FundRecord { dividend_yield: dy, ..base() });
            assert!(s >= last);
            last = s;
        }
        last = 0;
        for pvp in pvps {
            let s = calculate_score(&FundRecord { price_to_book: pvp, ..base() });
            assert!(s >= last);
            last = s;
        }
        last = 0;
        for liq in liquidity {
            let s = calculate_score(&FundRecord { liquidity: liq, ..base() });
            assert!(s >= last);
            last = s;
        }
        last = 0;
        for mv in market_values {
            let s = calculate_score(&FundRecord { market_value: mv, ..base() });
            assert!(s >= last);
            last = s;
        }
        assert_eq!(last, 2);
        last = 0;
        for vac in vacancies {
            let s = calculate_score(&FundRecord { vacancy: vac, ..base() });
            assert!(s >= last);
            assert!(s <= MAX_SCORE);
            last = s;
        }
    }

    #[test]
    fn test_score_funds_keeps_order() {
        let scored = score_funds(vec![
            FundRecord { ticker: "A11".into(), ..base() },
            FundRecord { ticker: "B11".into(), dividend_yield: 0.2, ..base() },
        ]);
        assert_eq!(scored[0].fund.ticker, "A11");
        assert_eq!(scored[0].score, 0);
        assert_eq!(scored[1].score, 2);
    }
}
