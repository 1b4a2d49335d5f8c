//! Movie controller logic and request validation.

mod crud;
mod validation;
pub use crud::{MovieService, NOTHING_TO_UPDATE, NOT_FOUND};
pub use validation::{Check, FieldRule, MovieField, RequestValidator, RuleSet};
