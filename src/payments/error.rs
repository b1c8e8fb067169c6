use thiserror::Error;

/// Errors raised by the payment domain before anything touches storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Unknown payment status: {0}")]
    UnknownStatus(String),

    #[error("Order id must be positive, got {0}")]
    InvalidOrderId(i64),

    #[error("Payment id cannot be empty")]
    EmptyPaymentId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PaymentError::UnknownStatus("paid".to_string()).to_string(),
            "Unknown payment status: paid"
        );
        assert_eq!(
            PaymentError::InvalidOrderId(-3).to_string(),
            "Order id must be positive, got -3"
        );
        assert_eq!(PaymentError::EmptyPaymentId.to_string(), "Payment id cannot be empty");
    }
}
