use serde::{Deserialize, Serialize};

/// Engraving fonts offered for name personalization, by display name.
pub const FONTS: [&str; 3] = ["Dancing Script", "Great Vibes", "Pacifico"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Personalization as emitted by the order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomizationPayload {
    Names { names: Vec<String>, font: String },
    Text { text: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub product_id: String,
    pub customer: CustomerInfo,
    #[serde(default)]
    pub customization: Option<CustomizationPayload>,
    #[serde(default)]
    pub pickup_confirmed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Ready,
    PickedUp,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Ready => "ready",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "ready" => Some(OrderStatus::Ready),
            "picked_up" => Some(OrderStatus::PickedUp),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

/// Set by the payment processor; intake never assigns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
    Failed,
    Refunded,
}

/// One row of the order log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub order_number: String,
    pub product_id: String,
    pub customer: CustomerInfo,
    pub customization: Option<CustomizationPayload>,
    pub status: OrderStatus,
    pub payment_status: Option<PaymentStatus>,
    pub total_price: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderReceipt {
    pub order_number: String,
    pub product_name: String,
    pub total_price: f64,
    pub status: OrderStatus,
    pub payment_available: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_shapes() {
        let names: CustomizationPayload =
            serde_json::from_value(json!({ "names": ["Ana"], "font": "Pacifico" })).unwrap();
        assert_eq!(
            names,
            CustomizationPayload::Names {
                names: vec!["Ana".to_string()],
                font: "Pacifico".to_string(),
            }
        );

        let text: CustomizationPayload =
            serde_json::from_value(json!({ "text": "Welcome" })).unwrap();
        assert_eq!(
            text,
            CustomizationPayload::Text {
                text: "Welcome".to_string()
            }
        );
    }

    #[test]
    fn test_request_defaults() {
        let request: OrderRequest = serde_json::from_value(json!({
            "product_id": "p1",
            "customer": { "name": "Ana", "email": "a@b.co", "phone": "(619) 555-1234" },
        }))
        .unwrap();
        assert!(request.customization.is_none());
        assert!(!request.pickup_confirmed);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(json!(OrderStatus::PickedUp), json!("picked_up"));
        for status in [
            OrderStatus::Pending,
            OrderStatus::Ready,
            OrderStatus::PickedUp,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("shipped"), None);
    }
}
