//! Observability for the search shell: counters, timers and structured
//! logging through `tracing`.

pub mod metrics;

pub use metrics::{MetricsSnapshot, SearchMetrics, Timer};
