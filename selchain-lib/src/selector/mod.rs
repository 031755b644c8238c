//! Ordered CSS selector construction.
//!
//! A [`SelectorChain`] accumulates fragments (`div`, `#main`, `.red`,
//! `[href]`, `:hover`, `::before`) and rejects parts that arrive out of rank
//! order. The [`facade`] module offers one starting function per kind.

pub mod chain;
pub mod error;
pub mod facade;
pub mod part;

pub use chain::SelectorChain;
pub use error::SelectorError;
pub use part::{Combinator, PartKind};
