//! Platform-independent chart logic: data, normalization, ordering, layout
//! and animation. Nothing in here touches the DOM.

pub mod animation;
pub mod config;
pub mod data;
pub mod driver;
pub mod format;
pub mod layout;
pub mod metrics;
pub mod order;
pub mod platform;
pub mod scale;
pub mod scene;
pub mod state;
pub mod timing;

pub use config::ChartConfig;
pub use data::{load_drivers, DataSource, LoadError};
pub use driver::{normalize, DriverRecord, NormalizedRecord, NormalizedSet};
pub use metrics::Metric;
pub use order::StackOrder;
pub use scene::Scene;
pub use state::{ChartState, PromoteOutcome, TransitionPhase};
