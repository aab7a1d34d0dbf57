use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_MAX_NAMES: usize = 1;
pub const DEFAULT_MAX_CHARS_PER_NAME: usize = 20;
pub const DEFAULT_MAX_TEXT_CHARS: usize = 50;

/// Larger counts from the catalog are clamped to these.
pub const NAME_SLOT_CEILING: usize = 20;
pub const CHAR_LIMIT_CEILING: usize = 500;

/// Which personalization policy applies to a product.
/// Unknown values read as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomizationType {
    Names,
    Text,
    #[default]
    #[serde(other)]
    None,
}

impl CustomizationType {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomizationType::Names => "names",
            CustomizationType::Text => "text",
            CustomizationType::None => "none",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "names" => CustomizationType::Names,
            "text" => CustomizationType::Text,
            _ => CustomizationType::None,
        }
    }
}

/// The per-product rule bag. Fields of the wrong shape read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizationRules {
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub max_names: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub max_chars_per_name: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<u32>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub allow_special_chars: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl CustomizationRules {
    /// Parse a raw JSON rule bag. Anything other than an object gives `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        if value.is_object() {
            serde_json::from_value(value).ok()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub barcode: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_filename: Option<String>,
    #[serde(default)]
    pub customization_type: CustomizationType,
    #[serde(default, deserialize_with = "lenient_rules")]
    pub customization_rules: Option<CustomizationRules>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_active() -> bool {
    true
}

/// Bounds a submitted customization is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limits {
    None,
    Names {
        max_names: usize,
        max_chars_per_name: usize,
    },
    Text {
        max_chars: usize,
    },
}

impl Product {
    /// Resolve the rule bag against the defaults for this product's type.
    pub fn limits(&self) -> Limits {
        let rules = self.customization_rules.as_ref();
        let count = |pick: fn(&CustomizationRules) -> Option<u32>,
                     default: usize,
                     ceiling: usize| {
            rules
                .and_then(pick)
                .map(|n| n as usize)
                .unwrap_or(default)
                .min(ceiling)
        };

        match self.customization_type {
            CustomizationType::None => Limits::None,
            CustomizationType::Names => Limits::Names {
                max_names: count(|r| r.max_names, DEFAULT_MAX_NAMES, NAME_SLOT_CEILING),
                max_chars_per_name: count(
                    |r| r.max_chars_per_name,
                    DEFAULT_MAX_CHARS_PER_NAME,
                    CHAR_LIMIT_CEILING,
                ),
            },
            CustomizationType::Text => Limits::Text {
                max_chars: count(|r| r.max_chars, DEFAULT_MAX_TEXT_CHARS, CHAR_LIMIT_CEILING),
            },
        }
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let whole = value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64));
    Ok(whole.filter(|n| *n > 0).and_then(|n| u32::try_from(n).ok()))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().filter(|s| !s.is_empty()).map(str::to_string))
}

fn lenient_rules<'de, D>(deserializer: D) -> Result<Option<CustomizationRules>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(CustomizationRules::from_value(Value::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(kind: &str, rules: Value) -> Product {
        serde_json::from_value(json!({
            "id": "p1",
            "barcode": "RD-0001",
            "name": "Ornament",
            "price": 24.0,
            "customization_type": kind,
            "customization_rules": rules,
        }))
        .unwrap()
    }

    #[test]
    fn test_unknown_type_reads_as_none() {
        let p = product("engraving", json!({}));
        assert_eq!(p.customization_type, CustomizationType::None);
        assert_eq!(p.limits(), Limits::None);
        assert!(p.active);
    }

    #[test]
    fn test_names_limits_with_partial_rules() {
        let p = product("names", json!({ "max_names": 3 }));
        assert_eq!(
            p.limits(),
            Limits::Names {
                max_names: 3,
                max_chars_per_name: 20,
            }
        );
    }

    #[test]
    fn test_malformed_fields_fall_back_to_defaults() {
        let p = product(
            "text",
            json!({ "max_chars": "lots", "max_names": -2, "placeholder": 7 }),
        );
        let rules = p.customization_rules.clone().unwrap();
        assert_eq!(rules.max_chars, None);
        assert_eq!(rules.max_names, None);
        assert_eq!(rules.placeholder, None);
        assert_eq!(p.limits(), Limits::Text { max_chars: 50 });
    }

    #[test]
    fn test_huge_counts_are_clamped() {
        let p = product(
            "names",
            json!({ "max_names": 4_000_000_000u64, "max_chars_per_name": 1_000_000 }),
        );
        assert_eq!(
            p.limits(),
            Limits::Names {
                max_names: NAME_SLOT_CEILING,
                max_chars_per_name: CHAR_LIMIT_CEILING,
            }
        );
        let p = product("text", json!({ "max_chars": 90_000 }));
        assert_eq!(p.limits(), Limits::Text { max_chars: CHAR_LIMIT_CEILING });
    }

    #[test]
    fn test_non_object_rules_are_dropped() {
        let p = product("names", json!("max_names=2"));
        assert!(p.customization_rules.is_none());
        assert_eq!(
            p.limits(),
            Limits::Names {
                max_names: 1,
                max_chars_per_name: 20,
            }
        );
    }

    #[test]
    fn test_type_parse_matches_serde_names() {
        for kind in [
            CustomizationType::Names,
            CustomizationType::Text,
            CustomizationType::None,
        ] {
            assert_eq!(CustomizationType::parse(kind.as_str()), kind);
            assert_eq!(json!(kind), json!(kind.as_str()));
        }
        assert_eq!(CustomizationType::parse("NAMES"), CustomizationType::None);
    }
}
