//! Stable external identifiers used for cross-referencing reloadable data.
//!
//! Every identifier is a thin newtype over a namespaced string. Newtypes keep
//! the four identifier spaces (themes, enchantments, world objects, tags)
//! from being mixed up at call sites, while staying transparent in
//! serialized content files.

use core::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// Key identifying a theme within one reload generation.
    ///
    /// Assigned externally at load time (the record name in the content
    /// pack); never stored on the theme record itself.
    ThemeKey
}

string_id! {
    /// Identifier of a host enchantment (e.g. `"example:smite"`).
    EnchantmentId
}

string_id! {
    /// Identifier of a world object that can feed power to a theme
    /// (e.g. `"oak_bookshelf"`).
    ObjectId
}

string_id! {
    /// Identifier of a tag covering many world objects at once.
    TagId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_source_string() {
        let key = ThemeKey::new("arcane");
        assert_eq!(key.to_string(), "arcane");
        assert_eq!(key.as_str(), "arcane");
    }

    #[test]
    fn test_identifiers_compare_structurally() {
        assert_eq!(ObjectId::from("oak_bookshelf"), ObjectId::new("oak_bookshelf"));
        assert_ne!(TagId::from("bookshelves"), TagId::from("candles"));
    }
}
