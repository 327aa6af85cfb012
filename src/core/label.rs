//! # Labels
//!
//! Display-name and facility-type derivation from raw tag maps.
//!
//! Pure string/mapping lookups: missing keys are treated as absent,
//! never as errors.

use super::poi::Tags;

/// Placeholder for a primary result with no usable name tags
pub const UNNAMED_MOSQUE: &str = "Unnamed Mosque";

/// Placeholder for a secondary (amenity) result with no usable name tags
pub const UNNAMED_FACILITY: &str = "Unnamed Facility";

/// Fallback type label when no category tag is present
pub const UNKNOWN_TYPE: &str = "Unknown Type";

/// Capitalize the first character only, leaving the rest unchanged
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive a display name from a tag map
///
/// Fallback chain: `tags["name"]` if present and non-empty, else the
/// capitalized category value (`amenity`, then `shop`), else the
/// caller's placeholder ([`UNNAMED_MOSQUE`] or [`UNNAMED_FACILITY`]
/// depending on context).
pub fn display_name(tags: &Tags, placeholder: &str) -> String {
    if let Some(name) = tags.get("name") {
        if !name.is_empty() {
            return name.clone();
        }
    }
    for key in ["amenity", "shop"] {
        if let Some(category) = tags.get(key) {
            if !category.is_empty() {
                return capitalize(category);
            }
        }
    }
    placeholder.to_string()
}

/// Derive a facility-type label from a tag map
///
/// First non-empty of `tags["amenity"]`, `tags["shop"]`, capitalized
/// first character only; else [`UNKNOWN_TYPE`].
pub fn display_type(tags: &Tags) -> String {
    for key in ["amenity", "shop"] {
        if let Some(category) = tags.get(key) {
            if !category.is_empty() {
                return capitalize(category);
            }
        }
    }
    UNKNOWN_TYPE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_display_name_prefers_name_tag() {
        let t = tags(&[("name", "Al-Noor"), ("amenity", "place_of_worship")]);
        assert_eq!(display_name(&t, UNNAMED_MOSQUE), "Al-Noor");
    }

    #[test]
    fn test_display_name_empty_name_falls_through() {
        let t = tags(&[("name", ""), ("amenity", "restaurant")]);
        assert_eq!(display_name(&t, UNNAMED_FACILITY), "Restaurant");
    }

    #[test]
    fn test_display_name_category_fallback() {
        assert_eq!(
            display_name(&tags(&[("shop", "bakery")]), UNNAMED_FACILITY),
            "Bakery"
        );
    }

    #[test]
    fn test_display_name_placeholder() {
        assert_eq!(display_name(&Tags::new(), UNNAMED_MOSQUE), "Unnamed Mosque");
        assert_eq!(
            display_name(&Tags::new(), UNNAMED_FACILITY),
            "Unnamed Facility"
        );
    }

    #[test]
    fn test_display_type_amenity() {
        let t = tags(&[("amenity", "restaurant")]);
        assert_eq!(display_type(&t), "Restaurant");
    }

    #[test]
    fn test_display_type_amenity_wins_over_shop() {
        let t = tags(&[("amenity", "cafe"), ("shop", "bakery")]);
        assert_eq!(display_type(&t), "Cafe");
    }

    #[test]
    fn test_display_type_first_char_only() {
        // Only the first character is capitalized, the rest is untouched
        let t = tags(&[("amenity", "place_of_worship")]);
        assert_eq!(display_type(&t), "Place_of_worship");
    }

    #[test]
    fn test_display_type_unknown() {
        assert_eq!(display_type(&Tags::new()), "Unknown Type");
        assert_eq!(display_type(&tags(&[("amenity", "")])), "Unknown Type");
    }
}
