//! Declaration modifiers.

use std::{collections::BTreeSet, fmt};

/// A Java declaration modifier.
///
/// Variants are declared in the conventional source order, so a
/// [`ModifierSet`] iterates them the way they should be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
}

impl Modifier {
    /// The keyword as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Default => "default",
            Self::Static => "static",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of modifiers.
pub type ModifierSet = BTreeSet<Modifier>;

/// Render modifiers followed by a space, or nothing when the set is empty.
pub(crate) fn modifier_prefix(modifiers: &ModifierSet) -> String {
    modifiers
        .iter()
        .map(|m| format!("{m} "))
        .collect::<String>()
}
