//! Live edit buffer for one product's personalization.
//!
//! A session is a plain value: every edit goes through [`apply`], which
//! returns the next state together with the payload that edit emits. The
//! form component only holds the session and forwards payloads, so the
//! rules here are testable without a browser.

use crate::commands::Product;

use super::payload::{CustomizationPayload, Font};
use super::preview::{self, Preview};
use super::rules::{NamesRules, ResolvedRules, TextRules};

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Name { index: usize, value: String },
    Font(Font),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamesState {
    rules: NamesRules,
    /// Always exactly `rules.max_names` long.
    names: Vec<String>,
    font: Font,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextState {
    rules: TextRules,
    text: String,
}

/// The shape is fixed when the session is created and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Inert,
    Names(NamesState),
    Text(TextState),
}

/// Pure transition: `(state, edit) -> (state, payload)`.
pub fn apply(session: Session, edit: Edit) -> (Session, Option<CustomizationPayload>) {
    let mut next = session;
    let payload = next.apply(edit);
    (next, payload)
}

/// Clamp to at most `max` characters. Counts Unicode scalar values, so a
/// multi-byte character is never split.
pub fn truncate_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((cut, _)) => value[..cut].to_string(),
        None => value.to_string(),
    }
}

impl Session {
    pub fn new(rules: ResolvedRules) -> Self {
        match rules {
            ResolvedRules::None => Session::Inert,
            ResolvedRules::Names(rules) => Session::Names(NamesState {
                names: vec![String::new(); rules.max_names],
                rules,
                font: Font::default(),
            }),
            ResolvedRules::Text(rules) => Session::Text(TextState {
                rules,
                text: String::new(),
            }),
        }
    }

    pub fn for_product(product: &Product) -> Self {
        Self::new(ResolvedRules::from_product(product))
    }

    /// Apply an edit in place. Returns the payload to emit, or `None` when the
    /// edit does not apply to this session: any edit on an inert session, an
    /// edit of the other kind, or a slot index past the last slot.
    pub fn apply(&mut self, edit: Edit) -> Option<CustomizationPayload> {
        match (self, edit) {
            (Session::Names(state), Edit::Name { index, value }) => {
                let max = state.rules.max_chars_per_name;
                let slot = state.names.get_mut(index)?;
                *slot = truncate_chars(&value, max);
                Some(state.payload())
            }
            (Session::Names(state), Edit::Font(font)) => {
                state.font = font;
                Some(state.payload())
            }
            (Session::Text(state), Edit::Text(value)) => {
                state.text = truncate_chars(&value, state.rules.max_chars);
                Some(state.payload())
            }
            _ => None,
        }
    }

    /// Payload for the current state, without editing anything.
    pub fn payload(&self) -> Option<CustomizationPayload> {
        match self {
            Session::Inert => None,
            Session::Names(state) => Some(state.payload()),
            Session::Text(state) => Some(state.payload()),
        }
    }

    /// Whether the mandatory field (first name slot, or the text) is filled.
    /// Sessions without personalization are always ready.
    pub fn is_ready(&self) -> bool {
        match self {
            Session::Inert => true,
            Session::Names(state) => state.names.first().is_some_and(|n| !n.trim().is_empty()),
            Session::Text(state) => !state.text.trim().is_empty(),
        }
    }

    pub fn preview(&self) -> Option<Preview> {
        match self {
            Session::Names(state) => preview::preview(&state.names, state.font),
            _ => None,
        }
    }
}

impl NamesState {
    pub fn rules(&self) -> &NamesRules {
        &self.rules
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// Characters currently in a slot, for the "n/max" counter.
    pub fn char_count(&self, index: usize) -> usize {
        self.names.get(index).map_or(0, |n| n.chars().count())
    }

    fn payload(&self) -> CustomizationPayload {
        CustomizationPayload::from_slots(&self.names, self.font)
    }
}

impl TextState {
    pub fn rules(&self) -> &TextRules {
        &self.rules
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn payload(&self) -> CustomizationPayload {
        CustomizationPayload::Text {
            text: self.text.clone(),
        }
    }
}
