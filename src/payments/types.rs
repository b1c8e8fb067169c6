//! Payment record types
//!
//! The record stored per order, its status vocabulary and the creation input.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::PaymentError;
use super::surcharge;

/// Opaque key/value blob exchanged with the payment gateway
pub type PaymentData = serde_json::Map<String, serde_json::Value>;

/// Lifecycle status of a gateway payment
///
/// Transitions are driven by the caller; any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    /// Waiting for the buyer or the gateway
    #[default]
    Pending,
    OnHold,
    Processing,
    Completed,
    Cancelled,
    Refunded,
    Failed,
    /// Gateway accepted the payment but settles it later
    Delayed,
    /// Something went wrong while handling the gateway response
    Error,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 9] = [
        PaymentStatus::Pending,
        PaymentStatus::OnHold,
        PaymentStatus::Processing,
        PaymentStatus::Completed,
        PaymentStatus::Cancelled,
        PaymentStatus::Refunded,
        PaymentStatus::Failed,
        PaymentStatus::Delayed,
        PaymentStatus::Error,
    ];

    /// The string stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::OnHold => "on-hold",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
            Self::Failed => "failed",
            Self::Delayed => "delayed",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PaymentError::UnknownStatus(s.to_string()))
    }
}

/// Payment record keyed by order id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub order_id: i64,
    /// Payment id assigned towards the gateway
    pub payment_id: String,
    pub status: PaymentStatus,
    /// Data sent to the payment gateway
    pub data_sent: PaymentData,
    /// Data received from the payment gateway
    pub data_received: PaymentData,
    pub date_added: DateTime<Utc>,
    /// Unset until the record is first updated
    pub date_updated: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Seller costs recorded in the data sent to the gateway
    pub fn seller_costs_sent(&self) -> Option<BigDecimal> {
        surcharge::seller_costs(&self.data_sent)
    }

    /// Seller costs confirmed by the gateway
    pub fn seller_costs_received(&self) -> Option<BigDecimal> {
        surcharge::seller_costs(&self.data_received)
    }

    /// Additional fee charged by the payment method, zero when none was added
    pub fn surcharge(&self) -> BigDecimal {
        surcharge::surcharge(&self.data_sent, &self.data_received)
    }

    pub fn includes_surcharge(&self) -> bool {
        surcharge::includes_surcharge(&self.data_sent, &self.data_received)
    }

    pub fn validate(&self) -> Result<(), PaymentError> {
        validate_identity(self.order_id, &self.payment_id)
    }
}

fn validate_identity(order_id: i64, payment_id: &str) -> Result<(), PaymentError> {
    if order_id <= 0 {
        return Err(PaymentError::InvalidOrderId(order_id));
    }
    if payment_id.trim().is_empty() {
        return Err(PaymentError::EmptyPaymentId);
    }
    Ok(())
}

/// Input for creating a payment record at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPayment {
    pub order_id: i64,
    pub payment_id: String,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub data_sent: PaymentData,
    #[serde(default)]
    pub data_received: PaymentData,
}

impl NewPayment {
    pub fn new(order_id: i64, payment_id: impl Into<String>, data_sent: PaymentData) -> Self {
        Self {
            order_id,
            payment_id: payment_id.into(),
            status: PaymentStatus::Pending,
            data_sent,
            data_received: PaymentData::new(),
        }
    }

    pub fn validate(&self) -> Result<(), PaymentError> {
        validate_identity(self.order_id, &self.payment_id)
    }

    /// Build the record as it is first stored
    pub fn into_payment(self, date_added: DateTime<Utc>) -> Payment {
        Payment {
            order_id: self.order_id,
            payment_id: self.payment_id,
            status: self.status,
            data_sent: self.data_sent,
            data_received: self.data_received,
            date_added,
            date_updated: None,
        }
    }
}
