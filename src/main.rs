use anyhow::{Context, Result};
use clap::Parser;
use lifeline::cli::{Cli, OutputFormat};
use lifeline::config::LifelineConfig;
use lifeline::csv_output::CsvSeriesOutput;
use lifeline::json_output::JsonOutput;
use lifeline::record::AttendanceRecord;
use lifeline::report::AttendanceReport;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Built-in defaults, overlaid with --config and then with explicit flags
fn load_config(args: &Cli) -> Result<LifelineConfig> {
    let base = match &args.config {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            LifelineConfig::from_file(path)?
        }
        None => LifelineConfig::default(),
    };

    let config = base.with_overrides(args.required, args.max_future, args.series_end);
    config.validate().context("Invalid calculator settings")?;
    Ok(config)
}

/// Render the report in the requested format
fn render(report: &AttendanceReport, format: OutputFormat, explain: bool) -> Result<String> {
    let output = match format {
        OutputFormat::Text => report.to_text(explain),
        OutputFormat::Json => JsonOutput::from_report(report)
            .to_json()
            .context("Failed to serialize report as JSON")?,
        OutputFormat::Csv => report
            .series
            .iter()
            .copied()
            .collect::<CsvSeriesOutput>()
            .to_csv(),
    };
    Ok(output)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(&args)?;
    tracing::debug!(?config, "effective configuration");

    let record = AttendanceRecord::new(args.attended, args.total, config.required_percent)?;
    let report = AttendanceReport::build(&record, &config);

    let output = render(&report, args.format, args.explain)?;
    print!("{}", output);
    if args.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
