use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, AppState};
use crate::payments::{Payment, PaymentStatus};

/// Read-only view of a payment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentView {
    pub order_id: i64,
    pub payment_id: String,
    pub status: PaymentStatus,
    /// Two-decimal amount, "0.00" when the payment method added no fee
    pub surcharge: String,
    pub includes_surcharge: bool,
    pub date_added: DateTime<Utc>,
    pub date_updated: Option<DateTime<Utc>>,
}

impl From<&Payment> for PaymentView {
    fn from(payment: &Payment) -> Self {
        Self {
            order_id: payment.order_id,
            payment_id: payment.payment_id.clone(),
            status: payment.status,
            surcharge: payment.surcharge().to_string(),
            includes_surcharge: payment.includes_surcharge(),
            date_added: payment.date_added,
            date_updated: payment.date_updated,
        }
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<PaymentView>, ApiError> {
    let payment = state.payments.load(order_id).await?;
    Ok(Json(PaymentView::from(&payment)))
}
