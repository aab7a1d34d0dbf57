use std::fmt;

use serde::{Deserialize, Serialize};

/// Engraving fonts offered for name personalization.
///
/// The set is closed: a session can only ever hold one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Font {
    #[default]
    #[serde(rename = "Dancing Script")]
    DancingScript,
    #[serde(rename = "Great Vibes")]
    GreatVibes,
    #[serde(rename = "Pacifico")]
    Pacifico,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::DancingScript, Font::GreatVibes, Font::Pacifico];

    /// Display name, also used as the CSS font-family.
    pub fn name(self) -> &'static str {
        match self {
            Font::DancingScript => "Dancing Script",
            Font::GreatVibes => "Great Vibes",
            Font::Pacifico => "Pacifico",
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized personalization handed to order submission.
///
/// Serializes to `{"names": [...], "font": "..."}` or `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CustomizationPayload {
    Names { names: Vec<String>, font: Font },
    Text { text: String },
}

impl CustomizationPayload {
    /// Keep only slots that are non-blank after trimming, in slot order.
    /// Kept values are not themselves trimmed.
    pub fn from_slots(slots: &[String], font: Font) -> Self {
        let names = filled_slots(slots).map(str::to_string).collect();
        CustomizationPayload::Names { names, font }
    }

    /// Short human-readable form used in the order summary.
    pub fn summary(&self) -> String {
        match self {
            CustomizationPayload::Names { names, .. } => names.join(", "),
            CustomizationPayload::Text { text } => text.clone(),
        }
    }
}

pub(crate) fn filled_slots(slots: &[String]) -> impl Iterator<Item = &str> {
    slots
        .iter()
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_serializes_as_display_name() {
        for font in Font::ALL {
            assert_eq!(serde_json::to_value(font).unwrap(), serde_json::json!(font.name()));
        }
        assert_eq!(Font::default(), Font::DancingScript);
    }

    #[test]
    fn test_blank_slots_filtered_in_order() {
        let slots = vec![
            "".to_string(),
            "Alice".to_string(),
            "   ".to_string(),
            "Bob".to_string(),
        ];
        let payload = CustomizationPayload::from_slots(&slots, Font::Pacifico);
        assert_eq!(
            payload,
            CustomizationPayload::Names {
                names: vec!["Alice".to_string(), "Bob".to_string()],
                font: Font::Pacifico,
            }
        );
    }

    #[test]
    fn test_names_payload_json_shape() {
        let payload = CustomizationPayload::Names {
            names: vec!["Alexa".to_string(), "Bo".to_string()],
            font: Font::DancingScript,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"names": ["Alexa", "Bo"], "font": "Dancing Script"})
        );
    }

    #[test]
    fn test_text_payload_json_shape() {
        let payload = CustomizationPayload::Text {
            text: "Happy 10th".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Happy 10th"}));
        assert_eq!(payload.summary(), "Happy 10th");
    }
}
