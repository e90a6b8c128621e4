// Adapters for the application ports

pub mod http_client;
pub mod xlsx_report;

pub use http_client::ReqwestHttp;
pub use xlsx_report::XlsxReportWriter;
