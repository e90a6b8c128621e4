//! Source and report constants shared across the pipeline.
//! Defaults here can be overridden through `ScreenerConfig`.

// Source page
pub const FUNDAMENTUS_FII_URL: &str = "https://www.fundamentus.com.br/fii_resultado.php";
pub const RESULT_TABLE_ID: &str = "tabelaResultado";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Report
pub const DEFAULT_OUTPUT_FILE: &str = "fundos_imobiliarios_filtrados.xlsx";
pub const ALL_FUNDS_SHEET: &str = "Todos Fundos";
pub const TOP_BY_SEGMENT_SHEET: &str = "Top por Segmento";
pub const DEFAULT_TOP_N: usize = 5;

/// Report column headers, in sheet order
pub const REPORT_COLUMNS: [&str; 9] = [
    "Papel",
    "Segmento",
    "Dividend Yield",
    "P/VP",
    "Valor de Mercado",
    "Liquidez",
    "Qtd Imoveis",
    "Vacancia Media",
    "Nota",
];

// Score cap
pub const MAX_SCORE: u8 = 10;
