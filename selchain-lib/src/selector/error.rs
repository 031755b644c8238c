use crate::selector::part::PartKind;
use thiserror::Error;

/// Errors raised while building a selector chain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A kind that may appear once per compound was supplied again.
    #[error("duplicate {kind} part `{value}`")]
    DuplicatePart { kind: PartKind, value: String },

    /// A part ranked below the chain's current cursor.
    #[error("{kind} part `{value}` cannot follow a {after} part")]
    OrderViolation {
        kind: PartKind,
        value: String,
        after: PartKind,
    },

    #[error("unknown selector part kind: {0}")]
    UnknownKind(String),

    #[error("unknown combinator: {0}")]
    UnknownCombinator(String),
}
