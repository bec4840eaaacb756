//! Display-name derivation from image filename stems.
//!
//! Files are named `Last_Name_Parts_First`: the final underscore-separated
//! token is the given name and everything before it is the family name.

/// A display name plus its alternate spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedName {
    /// Human-readable name, e.g. `Daniel Amato`.
    pub name: String,
    /// Alternate spellings. Never populated yet; kept so the manifest schema
    /// has a place for them.
    pub variants: Vec<String>,
}

/// Derives a display name from a filename stem.
///
/// `Amato_Daniel` becomes `Daniel Amato`, `Van_Der_Berg_Anna` becomes
/// `Anna Van Der Berg`. A stem without underscores is returned trimmed.
///
/// The given name and the space-joined family name are each trimmed, but
/// nothing else is removed: `Van__Berg_Anna` keeps the double space of its
/// empty token, and `Amato_` yields ` Amato`. A stem made only of
/// underscores or whitespace yields an empty name.
#[must_use]
pub fn derive_name(stem: &str) -> DerivedName {
    let tokens: Vec<&str> = stem.split('_').collect();

    let name = match tokens.split_last() {
        Some((first, rest)) if !rest.is_empty() => {
            let first = first.trim();
            let last = rest.join(" ");
            let last = last.trim();
            if first.is_empty() && last.is_empty() {
                String::new()
            } else {
                format!("{first} {last}")
            }
        }
        _ => stem.replace('_', " ").trim().to_string(),
    };

    DerivedName { name, variants: Vec::new() }
}
