//! Typed payloads carried in the envelope's `data` field.
//!
//! Only identifying fields are required; everything else defaults when the
//! platform omits it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Data for `order.paid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaidData {
    pub wordgate_order_no: String,
    /// Amount in minor currency units.
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub app_id: u64,
}

/// Data for `order.cancelled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancelledData {
    pub wordgate_order_no: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub app_id: u64,
    #[serde(default)]
    pub reason: String,
}

/// Data for `subscription.created`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionCreatedData {
    pub subscription_id: String,
    #[serde(default)]
    pub wordgate_order_no: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub billing_cycle: String,
    #[serde(default)]
    pub next_billing_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub app_id: u64,
}

/// Data for `subscription.updated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionUpdatedData {
    pub subscription_id: String,
    #[serde(default)]
    pub wordgate_order_no: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub billing_cycle: String,
    #[serde(default)]
    pub next_billing_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub app_id: u64,
    /// Names of the fields that changed.
    #[serde(default)]
    pub changes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn order_paid_minimal_payload_decodes() {
        let json = r#"{"wordgate_order_no":"ORDER123","amount":9900,"currency":"USD"}"#;

        let data: OrderPaidData = serde_json::from_str(json).unwrap();

        assert_eq!(data.wordgate_order_no, "ORDER123");
        assert_eq!(data.amount, 9900);
        assert_eq!(data.currency, "USD");
        assert!(!data.is_paid);
        assert!(data.paid_at.is_none());
    }

    #[test]
    fn order_paid_full_payload_decodes() {
        let json = r#"{
            "wordgate_order_no": "ORDER123",
            "amount": 9900,
            "currency": "USD",
            "is_paid": true,
            "paid_at": "2024-12-16T02:18:00Z",
            "app_id": 1
        }"#;

        let data: OrderPaidData = serde_json::from_str(json).unwrap();

        assert!(data.is_paid);
        assert_eq!(
            data.paid_at,
            Some(Utc.with_ymd_and_hms(2024, 12, 16, 2, 18, 0).unwrap())
        );
        assert_eq!(data.app_id, 1);
    }

    #[test]
    fn paid_at_accepts_explicit_null() {
        let json = r#"{"wordgate_order_no":"O","amount":1,"paid_at":null}"#;
        let data: OrderPaidData = serde_json::from_str(json).unwrap();
        assert!(data.paid_at.is_none());
    }

    #[test]
    fn paid_at_accepts_offset_timestamps() {
        let json = r#"{"wordgate_order_no":"O","amount":1,"paid_at":"2024-12-16T10:18:00+08:00"}"#;
        let data: OrderPaidData = serde_json::from_str(json).unwrap();
        assert_eq!(
            data.paid_at,
            Some(Utc.with_ymd_and_hms(2024, 12, 16, 2, 18, 0).unwrap())
        );
    }

    #[test]
    fn order_paid_requires_order_number() {
        let json = r#"{"amount":9900}"#;
        assert!(serde_json::from_str::<OrderPaidData>(json).is_err());
    }

    #[test]
    fn order_cancelled_carries_reason() {
        let json = r#"{"wordgate_order_no":"ORDER9","amount":500,"currency":"CNY","reason":"user request"}"#;

        let data: OrderCancelledData = serde_json::from_str(json).unwrap();

        assert_eq!(data.reason, "user request");
        assert!(data.cancelled_at.is_none());
    }

    #[test]
    fn order_cancelled_without_amount_decodes() {
        let json = r#"{"wordgate_order_no":"O1","reason":"user"}"#;

        let data: OrderCancelledData = serde_json::from_str(json).unwrap();

        assert_eq!(data.wordgate_order_no, "O1");
        assert_eq!(data.amount, 0);
        assert_eq!(data.reason, "user");
    }

    #[test]
    fn subscription_created_without_timestamp_decodes() {
        let json = r#"{"subscription_id":"sub_1","status":"active"}"#;

        let data: SubscriptionCreatedData = serde_json::from_str(json).unwrap();

        assert_eq!(data.subscription_id, "sub_1");
        assert!(data.created_at.is_none());
    }

    #[test]
    fn subscription_requires_subscription_id() {
        let json = r#"{"status":"active","created_at":"2024-12-16T02:18:00Z"}"#;
        assert!(serde_json::from_str::<SubscriptionCreatedData>(json).is_err());
        assert!(serde_json::from_str::<SubscriptionUpdatedData>(json).is_err());
    }

    #[test]
    fn subscription_updated_lists_changes() {
        let json = r#"{
            "subscription_id": "sub_1",
            "status": "active",
            "billing_cycle": "month",
            "updated_at": "2024-12-16T02:18:00Z",
            "changes": ["status", "next_billing_date"]
        }"#;

        let data: SubscriptionUpdatedData = serde_json::from_str(json).unwrap();

        assert_eq!(data.changes, vec!["status", "next_billing_date"]);
        assert_eq!(data.billing_cycle, "month");
        assert_eq!(
            data.updated_at,
            Some(Utc.with_ymd_and_hms(2024, 12, 16, 2, 18, 0).unwrap())
        );
    }
}
