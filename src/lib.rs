//! Payment record tracking for the Maksuturva payment gateway.
//!
//! Each host order maps to one gateway payment. The record keeps the
//! payment id, its lifecycle status and the data exchanged with the gateway.

pub mod config;
pub mod payments;

#[cfg(feature = "database")]
pub mod api;
pub mod database;

pub use payments::{NewPayment, Payment, PaymentData, PaymentError, PaymentStatus};

#[cfg(feature = "database")]
pub use database::{error::DatabaseError, PaymentRepository};
