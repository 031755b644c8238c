//! Stateless entry points into [`SelectorChain`].
//!
//! Each function starts a fresh chain, so the first part can never be
//! rejected and the result is returned directly:
//!
//! ```
//! use selchain_lib::selector::facade::{combine, element};
//!
//! let left = element("div").id("main")?;
//! let mut sel = combine(&left, "+", &element("a"));
//! assert_eq!(sel.render(), "div#main + a");
//! # Ok::<(), selchain_lib::selector::SelectorError>(())
//! ```

use crate::selector::chain::SelectorChain;
use crate::selector::part::PartKind;

/// Start a chain whose first part is `value` of `kind`.
pub fn start(kind: PartKind, value: impl AsRef<str>) -> SelectorChain {
    SelectorChain::starting_with(kind, value.as_ref())
}

pub fn element(value: impl AsRef<str>) -> SelectorChain {
    start(PartKind::Element, value)
}

pub fn id(value: impl AsRef<str>) -> SelectorChain {
    start(PartKind::Id, value)
}

pub fn class(value: impl AsRef<str>) -> SelectorChain {
    start(PartKind::Class, value)
}

pub fn attr(value: impl AsRef<str>) -> SelectorChain {
    start(PartKind::Attribute, value)
}

pub fn pseudo_class(value: impl AsRef<str>) -> SelectorChain {
    start(PartKind::PseudoClass, value)
}

pub fn pseudo_element(value: impl AsRef<str>) -> SelectorChain {
    start(PartKind::PseudoElement, value)
}

/// Join two chains into a fresh one: `left <combinator> right`.
pub fn combine(
    left: &SelectorChain,
    combinator: impl AsRef<str>,
    right: &SelectorChain,
) -> SelectorChain {
    SelectorChain::new().combine(left, combinator, right)
}
