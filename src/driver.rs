use std::hint::black_box;
use std::time::Instant;

use log::{debug, info};

use crate::config::BenchConfig;
use crate::detector::access_count;
use crate::error::BenchResult;
use crate::export::{ResultRow, RowSink};
use crate::list::CycleList;

/// Timing and access count of one (list, k) trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub avg_time_ms: f64,
    pub access_count: u64,
}

/// Time `iterations` detector runs over `list`, then run it once more to
/// sample the access count.
pub fn measure(list: &CycleList, k: usize, iterations: usize) -> Measurement {
    let iterations = iterations.max(1);

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(access_count(black_box(list), black_box(k)));
    }
    let elapsed = start.elapsed();

    let access_count = access_count(list, k);
    let avg_time_ms = elapsed.as_nanos() as f64 / iterations as f64 / 1_000_000.0;

    Measurement {
        avg_time_ms,
        access_count,
    }
}

/// Run every (size, scenario, k) trial of `config` and hand each row to
/// `sink`. Returns the number of rows written.
///
/// One list is built per (size, scenario) pair and reused for every k, so at
/// most one list is alive at a time.
pub fn run<S: RowSink>(config: &BenchConfig, sink: &mut S) -> BenchResult<usize> {
    config.validate()?;

    let mut rows = 0;

    for &n in &config.sizes {
        let iterations = config.iterations.iterations_for(n);

        for &scenario in &config.scenarios {
            info!("Running - Size: {}, Scenario: {}", n, scenario);

            let entry = scenario.resolve(n);
            let mut list = CycleList::build(n, entry);

            for &k in &config.step_ks {
                let measurement = measure(&list, k, iterations);
                debug!(
                    "n={} scenario={} k={} avg={}ms accesses={}",
                    n, scenario, k, measurement.avg_time_ms, measurement.access_count
                );

                sink.write_row(&ResultRow {
                    total_size: n,
                    cycle_type: scenario.label(),
                    cycle_pos: entry,
                    step_k: k,
                    avg_time_ms: measurement.avg_time_ms,
                    access_count: measurement.access_count,
                })?;
                rows += 1;
            }

            let released = list.teardown();
            debug!("released {} nodes", released);
        }
    }

    sink.finish()?;
    Ok(rows)
}
