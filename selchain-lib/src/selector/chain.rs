use crate::selector::error::SelectorError;
use crate::selector::part::PartKind;
use log::{debug, trace};

/// A mutable accumulator of selector fragments.
///
/// Parts must be added in rank order (see [`PartKind`]). Each adder consumes
/// the chain and hands it back on success, so calls compose with `?`:
///
/// ```
/// use selchain_lib::selector::SelectorChain;
///
/// let mut chain = SelectorChain::new()
///     .element("a")?
///     .class("nav")?
///     .pseudo_class("hover")?;
/// assert_eq!(chain.render(), "a.nav:hover");
/// # Ok::<(), selchain_lib::selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorChain {
    fragments: Vec<String>,
    /// Kind of the last part added; `None` on an empty chain.
    cursor: Option<PartKind>,
}

impl SelectorChain {
    pub fn new() -> Self {
        SelectorChain {
            fragments: Vec::new(),
            cursor: None,
        }
    }

    /// A chain holding a single part. Any kind is valid on an empty cursor.
    pub(crate) fn starting_with(kind: PartKind, value: &str) -> Self {
        let fragment = kind.fragment(value);
        trace!("starting chain with {} fragment {:?}", kind, fragment);
        SelectorChain {
            fragments: vec![fragment],
            cursor: Some(kind),
        }
    }

    /// Append `value` as a part of `kind`.
    ///
    /// Fails with `OrderViolation` when `kind` ranks below the cursor, and
    /// with `DuplicatePart` when it equals the cursor and is not repeatable.
    /// On failure the chain is dropped; nothing was appended.
    pub fn push(mut self, kind: PartKind, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        let value = value.as_ref();
        if let Some(cursor) = self.cursor {
            if kind < cursor {
                debug!("rejecting {} `{}` after {}", kind, value, cursor);
                return Err(SelectorError::OrderViolation {
                    kind,
                    value: value.to_string(),
                    after: cursor,
                });
            }
            if kind == cursor && !kind.is_repeatable() {
                debug!("rejecting duplicate {} `{}`", kind, value);
                return Err(SelectorError::DuplicatePart {
                    kind,
                    value: value.to_string(),
                });
            }
        }
        let fragment = kind.fragment(value);
        trace!("appending {} fragment {:?}", kind, fragment);
        self.fragments.push(fragment);
        self.cursor = Some(kind);
        Ok(self)
    }

    pub fn element(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(PartKind::Element, value)
    }

    pub fn id(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(PartKind::Id, value)
    }

    pub fn class(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(PartKind::Class, value)
    }

    pub fn attr(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(PartKind::Attribute, value)
    }

    pub fn pseudo_class(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(PartKind::PseudoClass, value)
    }

    /// Pseudo-element is the highest rank, so the only way to fail here is a
    /// second pseudo-element.
    pub fn pseudo_element(self, value: impl AsRef<str>) -> Result<Self, SelectorError> {
        self.push(PartKind::PseudoElement, value)
    }

    /// Replace this chain's fragments with `left`, the combinator wrapped in
    /// single spaces, then `right`.
    ///
    /// Ranks are not checked across the join: each side is a complete
    /// compound on its own. The cursor is left untouched.
    pub fn combine(
        mut self,
        left: &SelectorChain,
        combinator: impl AsRef<str>,
        right: &SelectorChain,
    ) -> Self {
        let joiner = format!(" {} ", combinator.as_ref());
        debug!(
            "combining {} + {} fragments with {:?}",
            left.fragments.len(),
            right.fragments.len(),
            joiner
        );
        let mut fragments = Vec::with_capacity(left.fragments.len() + right.fragments.len() + 1);
        fragments.extend(left.fragments.iter().cloned());
        fragments.push(joiner);
        fragments.extend(right.fragments.iter().cloned());
        self.fragments = fragments;
        self
    }

    /// Concatenate all fragments and reset the chain.
    ///
    /// This is one-shot: a second call without new parts returns `""`.
    pub fn render(&mut self) -> String {
        let rendered = std::mem::take(&mut self.fragments).concat();
        self.cursor = None;
        debug!("rendered selector {:?}", rendered);
        rendered
    }

    /// Fragments in emission order, without consuming them.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn cursor(&self) -> Option<PartKind> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
