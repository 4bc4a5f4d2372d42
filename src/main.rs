//! Aftersales-OS - Predictive Vehicle Aftersales Demo
//!
//! Simulates vehicle telemetry, classifies every reading and, when anything
//! looks wrong, walks through diagnosis, customer outreach, service booking
//! and manufacturing feedback.
//!
//! # Usage
//!
//! ```bash
//! # One healthy tick from the built-in baseline
//! cargo run --release
//!
//! # Ten ticks of the critical scenario, reproducible, as JSON lines
//! cargo run --release -- --preset critical --ticks 10 --seed 7 --json
//!
//! # Use the Generative Language API and book the second offered slot
//! GOOGLE_API_KEY=... cargo run --release -- --preset warning --book 2
//! ```
//!
//! # Environment Variables
//!
//! - `GOOGLE_API_KEY`: Text-generator credential (absent = template responses)
//! - `AFTERSALES_CONFIG`: Path to a TOML config file
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use aftersales_os::booking::{self, BookingConfirmation};
use aftersales_os::config::{defaults, AftersalesConfig};
use aftersales_os::history::SensorHistory;
use aftersales_os::llm::GeneratorFactory;
use aftersales_os::pipeline::{AftersalesCoordinator, ResponsePipeline};
use aftersales_os::sensors::{NoiseModel, SignalSimulator};
use aftersales_os::types::{Baseline, Preset, TickReport};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "aftersales-os")]
#[command(about = "Predictive vehicle aftersales intelligence demo")]
#[command(version)]
struct CliArgs {
    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 1)]
    ticks: usize,

    /// Start from a preset scenario instead of the configured baseline
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Override baseline engine temperature (°C)
    #[arg(long)]
    temperature: Option<f64>,

    /// Override baseline vibration (G)
    #[arg(long)]
    vibration: Option<f64>,

    /// Override baseline battery voltage (V)
    #[arg(long)]
    voltage: Option<f64>,

    /// Temperature noise standard deviation (others scale from it)
    #[arg(long)]
    noise: Option<f64>,

    /// Seed the simulator for reproducible readings
    #[arg(long)]
    seed: Option<u64>,

    /// Customer name used in outreach messages
    #[arg(long)]
    customer: Option<String>,

    /// Text-generator credential
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit one JSON object per tick instead of text
    #[arg(long)]
    json: bool,

    /// Book the N-th offered service slot (1-based) after the last tick
    #[arg(long, value_name = "N")]
    book: Option<usize>,
}

impl CliArgs {
    fn baseline(&self, config: &AftersalesConfig) -> Baseline {
        let mut baseline = self.preset.map_or(config.baseline, Preset::baseline);
        if let Some(t) = self.temperature {
            baseline.temperature = t;
        }
        if let Some(v) = self.vibration {
            baseline.vibration = v;
        }
        if let Some(v) = self.voltage {
            baseline.voltage = v;
        }
        baseline
    }
}

// ============================================================================
// Output
// ============================================================================

#[derive(Serialize)]
struct TickOutput<'a> {
    tick: usize,
    #[serde(flatten)]
    report: &'a TickReport,
    service_slots: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    booking: Option<&'a BookingConfirmation>,
}

fn print_report(tick: usize, report: &TickReport, slots: &[String]) {
    println!("── Tick {tick} ── {}", report.reading);

    let status = if report.verdict.is_critical {
        "CRITICAL"
    } else if report.verdict.is_anomalous() {
        "WARNING"
    } else {
        "HEALTHY"
    };
    println!("Status: {status}");
    for message in report.verdict.messages() {
        println!("  - {message}");
    }

    let Some(response) = &report.response else {
        println!("Vehicle Status: Healthy. No service action required.");
        println!();
        return;
    };

    println!();
    println!("Diagnosis [{}]:", response.diagnosis_source);
    println!("{}", response.diagnosis);
    println!();
    println!("Customer message [{}]:", response.customer_message_source);
    println!("{}", response.customer_message);
    println!();
    println!("Service slots:");
    for (i, slot) in slots.iter().enumerate() {
        println!("  {}. {slot}", i + 1);
    }
    println!();

    let feedback = &response.manufacturing_feedback;
    println!("Manufacturing feedback [{}]:", response.manufacturing_feedback_source);
    println!("  Root cause:  {}", feedback.root_cause);
    println!("  Cluster:     {}", feedback.defect_cluster_id);
    println!("  Suggestion:  {}", feedback.design_improvement_suggestion);
    println!();
}

fn print_raw_data(history: &SensorHistory) {
    println!("Raw data (last {} readings):", defaults::RAW_DATA_ROWS);
    println!("  {:<25} {:>9} {:>9} {:>9}", "timestamp", "temp_c", "vib_g", "volt_v");
    for r in history.raw_rows() {
        println!(
            "  {:<25} {:>9.1} {:>9.2} {:>9.2}",
            r.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            r.temperature,
            r.vibration,
            r.voltage
        );
    }
}

fn pick_slot(slots: &[String], n: usize) -> Result<&str> {
    if n == 0 || n > slots.len() {
        bail!("--book {n} is out of range: {} slots offered", slots.len());
    }
    Ok(&slots[n - 1])
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => AftersalesConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AftersalesConfig::load(),
    };
    if let Some(name) = &args.customer {
        config.concierge.customer_name.clone_from(name);
    }

    let baseline = args.baseline(&config);
    let noise_level = args.noise.unwrap_or(config.simulation.noise_level);

    let credential = args.api_key.as_deref().or(config.generator.api_key.as_deref());
    let generator = GeneratorFactory::from_credential(credential, &config.generator).await;
    let pipeline = ResponsePipeline::from_config(generator, &config.concierge);

    let simulator = match args.seed {
        Some(seed) => SignalSimulator::from_seed(seed),
        None => SignalSimulator::from_entropy(),
    }
    .with_noise_model(NoiseModel::from(&config.simulation));

    let mut coordinator = AftersalesCoordinator::new(simulator, pipeline)
        .with_history(SensorHistory::new(config.simulation.history_size));

    info!(
        ticks = args.ticks,
        temperature = baseline.temperature,
        vibration = baseline.vibration,
        voltage = baseline.voltage,
        noise_level,
        "Starting simulation"
    );

    for tick in 1..=args.ticks {
        let report = coordinator.tick(&baseline, noise_level).await;

        let slots = if report.verdict.is_anomalous() {
            booking::available_slots(&chrono::Local::now(), config.booking.slot_count)
        } else {
            Vec::new()
        };

        let confirmation = match args.book {
            Some(n) if tick == args.ticks && !slots.is_empty() => {
                Some(booking::confirm_booking(pick_slot(&slots, n)?))
            }
            _ => None,
        };

        if args.json {
            let output = TickOutput {
                tick,
                report: &report,
                service_slots: &slots,
                booking: confirmation.as_ref(),
            };
            println!("{}", serde_json::to_string(&output)?);
        } else {
            print_report(tick, &report, &slots);
            if let Some(c) = &confirmation {
                println!("{}", c.message);
                println!();
            }
        }

        if tick == args.ticks && args.book.is_some() && slots.is_empty() {
            info!("Last reading is healthy, no service slot booked");
        }
    }

    if !args.json {
        print_raw_data(coordinator.history());
    }

    let stats = coordinator.stats();
    info!(
        ticks = stats.ticks_processed,
        anomalous = stats.anomalous_ticks,
        critical = stats.critical_ticks,
        "Simulation complete"
    );

    Ok(())
}
