pub mod health;
pub mod metrics;
pub mod shifts_handler;

pub use health::health_check;
pub use metrics::{setup_metrics_recorder, MetricsState};
