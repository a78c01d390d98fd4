use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prize_catalog::Prize;

/// Messages the widget posts to the page that embeds it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum EmbedMessage {
    #[serde(rename = "prizeWon")]
    PrizeWon { prize: Prize },
    #[serde(rename = "discountClaimed")]
    DiscountClaimed { discount: String },
    #[serde(rename = "spin-wheel-close")]
    Close,
}

/// Commands an embedding page may send into the widget frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Show,
    Hide,
    Reset,
}

impl HostCommand {
    /// Accepts both bare strings (`"showSpinWheel"`) and tagged objects
    /// (`{"type": "WHEEL_RESET"}`). Anything else is ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let tag = match value {
            Value::String(tag) => tag.as_str(),
            Value::Object(map) => map.get("type")?.as_str()?,
            _ => return None,
        };

        match tag {
            "showSpinWheel" => Some(HostCommand::Show),
            "hideSpinWheel" => Some(HostCommand::Hide),
            "WHEEL_RESET" => Some(HostCommand::Reset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json(message: &EmbedMessage) -> String {
        serde_json::to_string(message).unwrap()
    }

    fn command(raw: &str) -> Option<HostCommand> {
        serde_json::from_str::<Value>(raw)
            .ok()
            .and_then(|value| HostCommand::from_value(&value))
    }

    #[test]
    fn test_outbound_wire_format() {
        let prize = Prize::new(2, "5% Discount", "#33FF57", 0.8);
        let value: Value = serde_json::from_str(&to_json(&EmbedMessage::PrizeWon { prize })).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "prizeWon",
                "prize": { "id": 2, "name": "5% Discount", "color": "#33FF57", "probability": 0.8 }
            })
        );

        let claimed = EmbedMessage::DiscountClaimed { discount: "15".to_string() };
        assert_eq!(to_json(&claimed), r#"{"type":"discountClaimed","discount":"15"}"#);
        assert_eq!(to_json(&EmbedMessage::Close), r#"{"type":"spin-wheel-close"}"#);
    }

    #[test]
    fn test_host_commands() {
        assert_eq!(command(r#""showSpinWheel""#), Some(HostCommand::Show));
        assert_eq!(command(r#""hideSpinWheel""#), Some(HostCommand::Hide));
        assert_eq!(command(r#"{"type":"WHEEL_RESET"}"#), Some(HostCommand::Reset));
        assert_eq!(command(r#"{"type":"showSpinWheel"}"#), Some(HostCommand::Show));
        assert_eq!(command(r#"{"type":"prizeWon"}"#), None);
        assert_eq!(command("42"), None);
        assert_eq!(command("not json"), None);
    }
}
