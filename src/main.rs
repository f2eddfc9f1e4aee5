use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use floyd_k::config::{DEFAULT_SIZES, default_step_ks};
use floyd_k::{BenchConfig, CsvExporter, IterationPolicy, Scenario};

#[derive(Parser, Debug)]
#[command(about = "Benchmark generalized Floyd cycle detection over padded linked lists")]
struct Args {
    /// Where to write the result table.
    #[arg(long, default_value = "floyd_raw_data.csv")]
    output: PathBuf,

    /// List sizes to benchmark.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Cycle scenarios to benchmark, by label (e.g. "NoCycle,Mod(30%)").
    #[arg(long, value_delimiter = ',', default_values_t = Scenario::ALL)]
    scenarios: Vec<Scenario>,

    /// Step multipliers; defaults to 1..=20 plus 32, 64, 128 and 256.
    #[arg(long = "step-k", value_delimiter = ',')]
    step_ks: Vec<usize>,

    /// Timed repeats for lists at or below the iteration threshold.
    #[arg(long, default_value = "500")]
    small_iterations: usize,

    /// Timed repeats for lists above the iteration threshold.
    #[arg(long, default_value = "50")]
    large_iterations: usize,

    #[arg(long, default_value = "10000")]
    iteration_threshold: usize,
}

impl Args {
    fn into_config(self) -> (PathBuf, BenchConfig) {
        let step_ks = if self.step_ks.is_empty() {
            default_step_ks()
        } else {
            self.step_ks
        };

        let config = BenchConfig {
            sizes: self.sizes,
            scenarios: self.scenarios,
            step_ks,
            iterations: IterationPolicy {
                small: self.small_iterations,
                large: self.large_iterations,
                threshold: self.iteration_threshold,
            },
        };

        (self.output, config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (output, config) = Args::parse().into_config();
    config.validate().context("invalid benchmark configuration")?;

    info!(
        "running {} trials, writing to {}",
        config.trial_count(),
        output.display()
    );

    let mut exporter = CsvExporter::create(&output)
        .with_context(|| format!("couldn't create {}", output.display()))?;
    let rows = floyd_k::run(&config, &mut exporter).context("benchmark run failed")?;

    info!("wrote {} rows to {}", rows, output.display());
    Ok(())
}
