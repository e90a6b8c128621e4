use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

use crate::common::error::{Result, ScreenerError};
use crate::types::RawTable;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScreenerError::Selector {
        selector: css.to_string(),
        message: format!("{:?}", e),
    })
}

/// Text content of an element with runs of whitespace collapsed
fn cell_text(element: ElementRef<'_>) -> String {
    let text: String = element.text().collect();
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Extract the table with the given element id from an HTML document.
///
/// The first `<tr>` supplies the headers (its `<th>` cells); each later `<tr>`
/// with `<td>` cells is a data row. Rows without `<td>` are skipped, and a
/// row whose width differs from the header row is rejected.
#[instrument(skip(html), fields(bytes = html.len()))]
pub fn parse_table(html: &str, table_id: &str) -> Result<RawTable> {
    let document = Html::parse_document(html);

    let table_selector = selector(&format!("table#{}", table_id))?;
    let row_selector = selector("tr")?;
    let header_selector = selector("th")?;
    let cell_selector = selector("td")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ScreenerError::TableNotFound {
            table_id: table_id.to_string(),
        })?;

    let mut rows_iter = table.select(&row_selector);
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row.select(&header_selector).map(cell_text).collect(),
        None => Vec::new(),
    };
    debug!(?headers, "parsed header row");

    let mut rows = Vec::new();
    // Row numbers are 1-based and count the header row, matching what a user
    // sees when inspecting the page.
    for (index, row) in rows_iter.enumerate() {
        let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        if cells.len() != headers.len() {
            return Err(ScreenerError::MalformedRow {
                row: index + 2,
                found: cells.len(),
                expected: headers.len(),
            });
        }
        rows.push(cells);
    }

    info!("Parsed table '#{}': {} columns, {} rows", table_id, headers.len(), rows.len());
    Ok(RawTable { headers, rows })
}
