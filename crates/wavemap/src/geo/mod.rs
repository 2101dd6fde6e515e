//! Country resolution and map placement.
//!
//! Folder names encode a country slug; this module maps slugs to display
//! names and display names to base pin positions on the site's world-map
//! canvas. Slugs outside the table title-case into a readable name and land
//! on the canvas center. Pin separation for same-country projects lives in
//! [`jitter`].

pub mod jitter;

use crate::project::Coordinates;

/// Pin position used when a country has no entry in the coordinate table.
pub const FALLBACK_COORDINATES: Coordinates = Coordinates::new(50.0, 50.0);

/// Country slug to display name, matched case-insensitively.
const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("china", "China"),
    ("saudi", "Saudi Arabia"),
    ("uae", "UAE"),
    ("france", "France"),
    ("germany", "Germany"),
    ("thailand", "Thailand"),
    ("australia", "Australia"),
    ("usa", "USA"),
    ("us", "USA"),
];

/// Display country to base pin position, in percent of the 2000x857 canvas.
const BASE_COORDINATES: &[(&str, Coordinates)] = &[
    ("China", Coordinates::new(72.0, 42.0)),
    ("Saudi Arabia", Coordinates::new(60.0, 48.0)),
    ("UAE", Coordinates::new(62.5, 49.5)),
    ("France", Coordinates::new(48.5, 33.0)),
    ("Germany", Coordinates::new(50.5, 30.0)),
    ("Thailand", Coordinates::new(71.0, 53.5)),
    ("Australia", Coordinates::new(81.5, 72.0)),
    ("USA", Coordinates::new(22.0, 38.0)),
];

/// Resolve a country slug to its display name.
///
/// Returns `None` for slugs outside the fixed table; callers fall back to
/// [`title_case`].
#[must_use]
pub fn country_display_name(slug: &str) -> Option<&'static str> {
    COUNTRY_NAMES
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(slug))
        .map(|(_, name)| *name)
}

/// Look up the base pin position for a display country, case-insensitively.
#[must_use]
pub fn base_coordinates(country: &str) -> Option<Coordinates> {
    BASE_COORDINATES
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(country))
        .map(|(_, coords)| *coords)
}

/// Title-case a slug word-by-word.
///
/// Splits on `-`, discards empty segments, and capitalizes the first letter
/// of each word: `new-york` becomes `New York`.
#[must_use]
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_display_name_mapped() {
        assert_eq!(country_display_name("china"), Some("China"));
        assert_eq!(country_display_name("saudi"), Some("Saudi Arabia"));
        assert_eq!(country_display_name("uae"), Some("UAE"));
        assert_eq!(country_display_name("france"), Some("France"));
        assert_eq!(country_display_name("germany"), Some("Germany"));
        assert_eq!(country_display_name("thailand"), Some("Thailand"));
        assert_eq!(country_display_name("australia"), Some("Australia"));
    }

    #[test]
    fn test_country_display_name_usa_aliases() {
        assert_eq!(country_display_name("usa"), Some("USA"));
        assert_eq!(country_display_name("us"), Some("USA"));
    }

    #[test]
    fn test_country_display_name_case_insensitive() {
        assert_eq!(country_display_name("China"), Some("China"));
        assert_eq!(country_display_name("SAUDI"), Some("Saudi Arabia"));
    }

    #[test]
    fn test_country_display_name_unmapped() {
        assert_eq!(country_display_name("atlantis"), None);
        assert_eq!(country_display_name(""), None);
    }

    #[test]
    fn test_base_coordinates_mapped() {
        let china = base_coordinates("China").unwrap();
        assert!((china.x - 72.0).abs() < f64::EPSILON);
        assert!((china.y - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_coordinates_case_insensitive() {
        assert!(base_coordinates("saudi arabia").is_some());
        assert!(base_coordinates("USA").is_some());
        assert!(base_coordinates("usa").is_some());
    }

    #[test]
    fn test_base_coordinates_unmapped() {
        assert!(base_coordinates("Atlantis").is_none());
    }

    #[test]
    fn test_every_mapped_country_has_coordinates() {
        for (_, name) in COUNTRY_NAMES {
            assert!(
                base_coordinates(name).is_some(),
                "no coordinates for {name}"
            );
        }
    }

    #[test]
    fn test_fallback_is_canvas_center() {
        assert!((FALLBACK_COORDINATES.x - 50.0).abs() < f64::EPSILON);
        assert!((FALLBACK_COORDINATES.y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("riyadh"), "Riyadh");
        assert_eq!(title_case("unknownland"), "Unknownland");
    }

    #[test]
    fn test_title_case_multiple_words() {
        assert_eq!(title_case("new-york"), "New York");
        assert_eq!(title_case("gold-coast-north"), "Gold Coast North");
    }

    #[test]
    fn test_title_case_discards_empty_segments() {
        assert_eq!(title_case("gold--coast"), "Gold Coast");
        assert_eq!(title_case("-gold-"), "Gold");
        assert_eq!(title_case(""), "");
    }
}
