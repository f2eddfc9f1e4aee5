use once_cell::sync::Lazy;

pub mod config;
pub mod detector;
pub mod driver;
pub mod error;
pub mod export;
pub mod list;
pub mod node;
pub mod node_allocator;
pub mod scenario;

pub use config::{BenchConfig, IterationPolicy};
pub use detector::{Detection, access_count, detect};
pub use driver::{Measurement, measure, run};
pub use error::{BenchError, BenchResult};
pub use export::{CsvExporter, HEADER, ResultRow, RowSink};
pub use list::CycleList;
pub use scenario::Scenario;

/// Alignment for cache lines (typically 64 bytes on modern CPUs)
pub(crate) static CACHE_LINE_SIZE: Lazy<usize> = Lazy::new(|| {
    // Try data cache first (most relevant for pointer chasing)
    cache_size::cache_line_size(1, cache_size::CacheType::Data)
        // Fall back to unified cache if data cache info isn't available
        .or_else(|| cache_size::cache_line_size(1, cache_size::CacheType::Unified))
        // Try L2 cache if L1 isn't available
        .or_else(|| cache_size::cache_line_size(2, cache_size::CacheType::Data))
        .or_else(|| cache_size::cache_line_size(2, cache_size::CacheType::Unified))
        .filter(|size| size.is_power_of_two())
        // Default to 64 bytes if all detection fails
        .unwrap_or(64)
});
