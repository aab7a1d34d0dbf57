//! Turns a product's declared customization type and rule bag into concrete
//! operating parameters. Defaults are applied here, once, when a session is
//! created; nothing downstream re-reads the raw rule bag.

use crate::commands::{CustomizationRules, CustomizationType, Product};

pub const DEFAULT_MAX_NAMES: usize = 1;
pub const DEFAULT_MAX_CHARS_PER_NAME: usize = 20;
pub const DEFAULT_MAX_TEXT_CHARS: usize = 50;

/// Larger counts from the catalog are clamped to these.
pub const NAME_SLOT_CEILING: usize = 20;
pub const CHAR_LIMIT_CEILING: usize = 500;
pub const DEFAULT_NAME_PLACEHOLDER: &str = "Enter name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamesRules {
    pub max_names: usize,
    pub max_chars_per_name: usize,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRules {
    pub max_chars: usize,
    /// Empty when the catalog gives none.
    pub placeholder: String,
}

/// Resolved rule set, one variant per customization type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedRules {
    None,
    Names(NamesRules),
    Text(TextRules),
}

impl ResolvedRules {
    pub fn from_product(product: &Product) -> Self {
        Self::resolve(
            product.customization_type,
            product.customization_rules.as_ref(),
        )
    }

    /// Never fails: missing or unusable parameters take their defaults.
    pub fn resolve(kind: CustomizationType, rules: Option<&CustomizationRules>) -> Self {
        let count = |pick: fn(&CustomizationRules) -> Option<u32>,
                     default: usize,
                     ceiling: usize| {
            rules
                .and_then(pick)
                .map(|n| n as usize)
                .filter(|n| *n > 0)
                .unwrap_or(default)
                .min(ceiling)
        };
        let placeholder = rules.and_then(|r| r.placeholder.clone());

        match kind {
            CustomizationType::None => ResolvedRules::None,
            CustomizationType::Names => ResolvedRules::Names(NamesRules {
                max_names: count(|r| r.max_names, DEFAULT_MAX_NAMES, NAME_SLOT_CEILING),
                max_chars_per_name: count(
                    |r| r.max_chars_per_name,
                    DEFAULT_MAX_CHARS_PER_NAME,
                    CHAR_LIMIT_CEILING,
                ),
                placeholder: placeholder.unwrap_or_else(|| DEFAULT_NAME_PLACEHOLDER.to_string()),
            }),
            CustomizationType::Text => ResolvedRules::Text(TextRules {
                max_chars: count(|r| r.max_chars, DEFAULT_MAX_TEXT_CHARS, CHAR_LIMIT_CEILING),
                placeholder: placeholder.unwrap_or_default(),
            }),
        }
    }

    /// The hint line shown above the inputs.
    pub fn instructions(&self) -> Option<String> {
        match self {
            ResolvedRules::None => None,
            ResolvedRules::Names(rules) => Some(rules.instructions()),
            ResolvedRules::Text(rules) => Some(rules.instructions()),
        }
    }
}

impl NamesRules {
    pub fn instructions(&self) -> String {
        if self.max_names == 1 {
            format!("Enter a name (max {} characters)", self.max_chars_per_name)
        } else {
            format!(
                "Enter up to {} names (max {} characters each)",
                self.max_names, self.max_chars_per_name
            )
        }
    }

    pub fn slot_label(&self, index: usize) -> String {
        if self.max_names == 1 {
            "Name".to_string()
        } else {
            format!("Name {}", index + 1)
        }
    }

    /// Only the first slot gates submission.
    pub fn is_required(index: usize) -> bool {
        index == 0
    }
}

impl TextRules {
    pub fn instructions(&self) -> String {
        format!("Enter your custom text (max {} characters)", self.max_chars)
    }
}
