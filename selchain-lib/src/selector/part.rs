use crate::selector::error::SelectorError;
use std::fmt;
use std::str::FromStr;

/// The category of a selector fragment.
///
/// Variants are declared in the order they must appear inside one compound
/// selector, so the derived `Ord` is the ranking the chain enforces:
/// element < id < class < attribute < pseudo-class < pseudo-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartKind {
    /// `div`
    Element,
    /// `#main`
    Id,
    /// `.active`
    Class,
    /// `[type="text"]`
    Attribute,
    /// `:hover`
    PseudoClass,
    /// `::before`
    PseudoElement,
}

impl PartKind {
    /// All kinds in rank order.
    pub const ALL: [PartKind; 6] = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ];

    /// Numeric rank, 1 (element) through 6 (pseudo-element). 0 is reserved
    /// for an empty chain and never returned here.
    pub fn rank(self) -> u8 {
        match self {
            PartKind::Element => 1,
            PartKind::Id => 2,
            PartKind::Class => 3,
            PartKind::Attribute => 4,
            PartKind::PseudoClass => 5,
            PartKind::PseudoElement => 6,
        }
    }

    /// Whether the kind may follow itself in the same compound.
    ///
    /// Pseudo-classes carry no duplicate check, so `a:hover:focus` is
    /// accepted just like `.a.b`.
    pub fn is_repeatable(self) -> bool {
        matches!(
            self,
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass
        )
    }

    /// Render `value` with this kind's marker.
    pub fn fragment(self, value: &str) -> String {
        match self {
            PartKind::Element => value.to_string(),
            PartKind::Id => format!("#{}", value),
            PartKind::Class => format!(".{}", value),
            PartKind::Attribute => format!("[{}]", value),
            PartKind::PseudoClass => format!(":{}", value),
            PartKind::PseudoElement => format!("::{}", value),
        }
    }

    /// Kebab-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            PartKind::Element => "element",
            PartKind::Id => "id",
            PartKind::Class => "class",
            PartKind::Attribute => "attr",
            PartKind::PseudoClass => "pseudo-class",
            PartKind::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PartKind {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "element" => Ok(PartKind::Element),
            "id" => Ok(PartKind::Id),
            "class" => Ok(PartKind::Class),
            "attr" | "attribute" => Ok(PartKind::Attribute),
            "pseudo-class" | "pseudoClass" | "pseudo_class" => Ok(PartKind::PseudoClass),
            "pseudo-element" | "pseudoElement" | "pseudo_element" => Ok(PartKind::PseudoElement),
            other => Err(SelectorError::UnknownKind(other.to_string())),
        }
    }
}

/// Joins two chains in `SelectorChain::combine`.
///
/// Any string works as a combinator; this enum just names the standard ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (whitespace). Renders as an empty symbol, so the
    /// joiner leaves two spaces between the chains.
    Descendant,
    /// Child combinator (`>`).
    Child,
    /// Adjacent sibling combinator (`+`).
    AdjacentSibling,
    /// General sibling combinator (`~`).
    GeneralSibling,
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => "",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Combinator::Descendant),
            ">" => Ok(Combinator::Child),
            "+" => Ok(Combinator::AdjacentSibling),
            "~" => Ok(Combinator::GeneralSibling),
            other => Err(SelectorError::UnknownCombinator(other.to_string())),
        }
    }
}
