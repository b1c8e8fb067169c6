//! Payment domain model
//!
//! Framework-agnostic representation of a gateway payment record: the
//! mapping from a host order to the Maksuturva payment and its status.

pub mod error;
pub mod surcharge;
pub mod types;

pub use error::PaymentError;
pub use types::{NewPayment, Payment, PaymentData, PaymentStatus};
