//! Product personalization rule engine.
//!
//! Given a product's customization type and rule bag, this module resolves
//! the bounds, keeps the live edit buffer, and produces the normalized payload
//! that order submission receives.
//!
//! # Flow
//!
//! - **Rules**: `ResolvedRules::from_product` fills defaults once
//! - **Session**: `Session::new(rules)` creates the buffer for one visit
//! - **Edits**: `session.apply(edit)` clamps input and returns the payload
//! - **Readiness**: `session.is_ready()` tells the order form whether the
//!   mandatory field is filled
//!
//! No Leptos types appear here; the form component is a thin shell around
//! these values.

mod payload;
mod preview;
mod rules;
mod session;

pub use payload::{CustomizationPayload, Font};
pub use rules::{NamesRules, ResolvedRules};
pub use session::{apply, Edit, Session};
