pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod logging;

pub use domain::breakdown::{BreakdownCalculator, PaymentBreakdown, compute_breakdown};
pub use domain::money::{FeeRate, PLATFORM_FEE_PERCENTAGE, ServiceAmount};
pub use domain::status::PaymentStatus;
pub use error::{PaymentError, Result};
