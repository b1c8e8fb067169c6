//! Surcharge calculation
//!
//! Some payment methods add a fee on top of the order total. The gateway
//! reports it by returning a higher `pmt_sellercosts` than the shop sent.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use regex::Regex;
use serde_json::Value;
use std::str::FromStr;
use std::sync::OnceLock;

use super::types::PaymentData;

/// Field carrying the seller costs in both directions
pub const SELLER_COSTS_FIELD: &str = "pmt_sellercosts";

const SURCHARGE_SCALE: i64 = 2;

/// Plain decimal notation only; exponents and oversized values are rejected
fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-?\d{1,15}([.,]\d{1,10})?$").expect("valid amount pattern"))
}

fn parse_decimal(raw: &str) -> Option<BigDecimal> {
    let raw = raw.trim();
    if !amount_pattern().is_match(raw) {
        return None;
    }
    BigDecimal::from_str(&raw.replace(',', ".")).ok()
}

/// Read a decimal amount, accepting a comma as decimal separator
pub fn parse_amount(value: &Value) -> Option<BigDecimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(raw) => parse_decimal(raw),
        _ => None,
    }
}

pub fn seller_costs(data: &PaymentData) -> Option<BigDecimal> {
    data.get(SELLER_COSTS_FIELD).and_then(parse_amount)
}

/// Positive difference between received and sent seller costs, two decimals
pub fn surcharge(data_sent: &PaymentData, data_received: &PaymentData) -> BigDecimal {
    match (seller_costs(data_sent), seller_costs(data_received)) {
        (Some(sent), Some(received)) if received > sent => {
            (received - sent).with_scale_round(SURCHARGE_SCALE, RoundingMode::HalfUp)
        }
        _ => BigDecimal::zero().with_scale(SURCHARGE_SCALE),
    }
}

pub fn includes_surcharge(data_sent: &PaymentData, data_received: &PaymentData) -> bool {
    surcharge(data_sent, data_received) > BigDecimal::zero()
}
