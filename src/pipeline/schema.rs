use std::collections::HashMap;

use crate::common::error::{Result, ScreenerError};

/// How a column's text is turned into a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    Text,
    /// `"12,34%"` style, stored as a fraction
    Percentage,
    /// `"0,95"` style
    Decimal,
    /// `"1.850,00"` style, `.` groups thousands
    GroupedDecimal,
    /// `"1.234.567"` style
    Integer,
    /// Integer that must be a whole, non-negative count
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Ticker,
    Segment,
    Price,
    FfoYield,
    DividendYield,
    PriceToBook,
    MarketValue,
    Liquidity,
    PropertyCount,
    CapRate,
    Vacancy,
}

/// Every recognized column, in the order the source page lists them
pub const SCHEMA: [Column; 11] = [
    Column::Ticker,
    Column::Segment,
    Column::Price,
    Column::FfoYield,
    Column::DividendYield,
    Column::PriceToBook,
    Column::MarketValue,
    Column::Liquidity,
    Column::PropertyCount,
    Column::CapRate,
    Column::Vacancy,
];

impl Column {
    /// Header text as published on the source page
    pub fn label(self) -> &'static str {
        match self {
            Column::Ticker => "Papel",
            Column::Segment => "Segmento",
            Column::Price => "Cotação",
            Column::FfoYield => "FFO Yield",
            Column::DividendYield => "Dividend Yield",
            Column::PriceToBook => "P/VP",
            Column::MarketValue => "Valor de Mercado",
            Column::Liquidity => "Liquidez",
            Column::PropertyCount => "Qtd de imóveis",
            Column::CapRate => "Cap Rate",
            Column::Vacancy => "Vacância Média",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::Price => &["Cotacao"],
            Column::PropertyCount => &["Qtd Imoveis"],
            Column::Vacancy => &["Vacancia Media"],
            _ => &[],
        }
    }

    pub fn class(self) -> FieldClass {
        match self {
            Column::Ticker | Column::Segment => FieldClass::Text,
            Column::Price => FieldClass::GroupedDecimal,
            Column::PriceToBook => FieldClass::Decimal,
            Column::FfoYield | Column::DividendYield | Column::CapRate | Column::Vacancy => {
                FieldClass::Percentage
            }
            Column::MarketValue | Column::Liquidity => FieldClass::Integer,
            Column::PropertyCount => FieldClass::Count,
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Column::Price | Column::FfoYield | Column::CapRate)
    }

    fn matches_header(self, header: &str) -> bool {
        let header = header.trim();
        std::iter::once(self.label())
            .chain(self.aliases().iter().copied())
            .any(|name| name.to_lowercase() == header.to_lowercase())
    }
}

/// Positions of the schema columns within a parsed header row
#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    positions: HashMap<Column, usize>,
}

impl ResolvedSchema {
    /// Locate every schema column in `headers`, failing on the first
    /// required column that is absent.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let mut positions = HashMap::new();
        for column in SCHEMA {
            match headers.iter().position(|h| column.matches_header(h)) {
                Some(index) => {
                    positions.insert(column, index);
                }
                None if column.is_required() => {
                    return Err(ScreenerError::MissingColumn(column.label().to_string()));
                }
                None => {}
            }
        }
        Ok(Self { positions })
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    /// Cell for `column` in `row`, or `None` when the column is absent
    pub fn cell<'a>(&self, row: &'a [String], column: Column) -> Option<&'a str> {
        self.position(column)
            .and_then(|index| row.get(index))
            .map(String::as_str)
    }
}
