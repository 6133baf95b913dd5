pub mod health;
pub mod metrics;
pub mod shares;

pub use health::{health_check, readiness_check};
pub use metrics::metrics;
pub use shares::{create_share, get_share};
