use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use lumina_astrology::{ChartBuilder, NatalChart, SwissEphemerisAdapter, TransitCorrelator};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Natal charts and transits from the command line")]
struct Args {
    /// Config file (default: configs/lumina.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a birth chart and print it as JSON.
    Chart {
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Birth time (UT), HH:MM
        #[arg(long)]
        time: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Compute transits to a stored chart and print them as JSON.
    Transits {
        /// Chart JSON produced by `lumina chart`
        #[arg(long)]
        chart: PathBuf,
        /// Reference instant, RFC 3339 (default: now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = lumina_config::load_settings(args.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();
    if let Some(source) = &settings.source {
        log::info!("Loaded settings from {}", source.display());
    }

    let provider = Arc::new(SwissEphemerisAdapter::new());

    match args.command {
        Command::Chart { date, time, lat, lon } => {
            let builder = ChartBuilder::new(Arc::clone(&provider))
                .with_house_system(settings.house_system);
            let chart = builder.calculate_birth_chart(&date, &time, lat, lon)?;
            if !chart.diagnostics.is_complete() {
                log::warn!(
                    "Chart is degraded: bodies {:?}, house fallback {}",
                    chart.diagnostics.degraded_bodies,
                    chart.diagnostics.house_fallback
                );
            }
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
        Command::Transits { chart, at } => {
            let text = fs::read_to_string(&chart)
                .with_context(|| format!("Could not read chart {}", chart.display()))?;
            let natal: NatalChart = serde_json::from_str(&text)
                .with_context(|| format!("Invalid chart JSON in {}", chart.display()))?;
            let correlator = TransitCorrelator::new(Arc::clone(&provider));
            let snapshot = correlator.calculate_current_transits(&natal, at)?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}
