use std::cmp::Ordering;

use crate::types::ScoredFund;

fn by_score_then_yield(a: &ScoredFund, b: &ScoredFund) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.fund.dividend_yield.total_cmp(&a.fund.dividend_yield))
}

/// Sort by score (descending), ties broken by dividend yield (descending).
/// The sort is stable, so full ties keep their scraped order.
pub fn rank_funds(funds: &mut [ScoredFund]) {
    funds.sort_by(by_score_then_yield);
}

/// Best `n` funds of every segment, grouped by segment (ascending) and
/// ordered by score within each group.
pub fn top_by_segment(funds: &[ScoredFund], n: usize) -> Vec<ScoredFund> {
    let mut ordered: Vec<&ScoredFund> = funds.iter().collect();
    ordered.sort_by(|a, b| {
        a.fund
            .segment
            .cmp(&b.fund.segment)
            .then_with(|| by_score_then_yield(a, b))
    });

    let mut top: Vec<ScoredFund> = Vec::new();
    let mut taken = 0;
    let mut current: Option<&str> = None;
    for fund in ordered {
        if current != Some(fund.fund.segment.as_str()) {
            current = Some(fund.fund.segment.as_str());
            taken = 0;
        }
        if taken < n {
            top.push(fund.clone());
            taken += 1;
        }
    }

    top.sort_by(|a, b| {
        a.fund
            .segment
            .cmp(&b.fund.segment)
            .then_with(|| b.score.cmp(&a.score))
    });
    top
}

/// Split an already grouped list into `(segment, funds)` blocks
pub fn group_by_segment(funds: &[ScoredFund]) -> Vec<(&str, Vec<&ScoredFund>)> {
    let mut groups: Vec<(&str, Vec<&ScoredFund>)> = Vec::new();
    for fund in funds {
        if let Some((segment, members)) = groups.last_mut() {
            if *segment == fund.fund.segment {
                members.push(fund);
                continue;
            }
        }
        groups.push((fund.fund.segment.as_str(), vec![fund]));
    }
    groups
}
