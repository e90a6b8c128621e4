use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use fii_screener::app::console_summary;
use fii_screener::infra::{ReqwestHttp, XlsxReportWriter};
use fii_screener::{logging, ScreenUseCase, ScreenerConfig};

#[derive(Parser)]
#[command(name = "fii_screener")]
#[command(about = "Ranks Fundamentus real-estate funds (FIIs) into an Excel report")]
#[command(version)]
struct Cli {
    /// TOML file overriding source, filter and report settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Workbook to write (default: fundos_imobiliarios_filtrados.xlsx)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Funds kept per segment in the "Top por Segmento" sheet
    #[arg(long)]
    top_n: Option<usize>,

    /// Also write a JSON summary of the run to this path
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> anyhow::Result<ScreenerConfig> {
    let mut config = match &cli.config {
        Some(path) => ScreenerConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ScreenerConfig::default(),
    };
    if let Some(output) = &cli.output {
        config.report.output = output.clone();
    }
    if let Some(top_n) = cli.top_n {
        config.report.top_n = top_n;
    }
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    println!("\n=== FII Screener ===");
    println!("Source: Fundamentus ({})", config.source.url);

    let http = ReqwestHttp::new(config.source.timeout(), config.source.user_agent.clone())
        .context("building HTTP client")?;
    let use_case = ScreenUseCase::new(Box::new(http), Box::new(XlsxReportWriter::new()), config);

    println!("\nFetching fund listings...");
    let outcome = use_case.run().context("screening failed")?;

    print!("\n{}", console_summary::render(&outcome));

    if let Some(path) = &cli.summary_json {
        outcome
            .write_json(path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let _guard = logging::init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("\nError: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
