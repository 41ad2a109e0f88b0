//! Static phrase table tests

use anuvad::application::phrases;

#[test]
fn test_known_phrase() {
    assert_eq!(
        phrases::lookup("Properties", "mr", None),
        Some("मालमत्ता".to_string())
    );
    assert_eq!(
        phrases::lookup("View Details", "mr", None),
        Some("तपशील पहा".to_string())
    );
}

#[test]
fn test_unknown_phrase_is_miss() {
    assert_eq!(phrases::lookup("Luxury 3BHK Apartment in CIDCO", "mr", None), None);
    assert_eq!(phrases::lookup("", "mr", None), None);
}

#[test]
fn test_other_target_language_is_miss() {
    assert_eq!(phrases::lookup("Properties", "fr", None), None);
    assert_eq!(phrases::lookup("Properties", "en", None), None);
}

#[test]
fn test_context_override() {
    // Context-specific entry wins over the context-free one
    assert_eq!(
        phrases::lookup("Book", "mr", Some("action")),
        Some("बुक करा".to_string())
    );
    assert_eq!(phrases::lookup("Book", "mr", None), Some("पुस्तक".to_string()));

    // Unknown context falls back to the context-free entry
    assert_eq!(
        phrases::lookup("Book", "mr", Some("heading")),
        Some("पुस्तक".to_string())
    );
}

#[test]
fn test_numeric_pattern() {
    assert_eq!(phrases::lookup("1200", "mr", None), Some("१२००".to_string()));
    assert_eq!(
        phrases::lookup("1,50,000", "mr", None),
        Some("१,५०,०००".to_string())
    );
}

#[test]
fn test_unit_patterns() {
    assert_eq!(phrases::lookup("3 BHK", "mr", None), Some("३ बीएचके".to_string()));
    assert_eq!(phrases::lookup("3BHK", "mr", None), Some("३ बीएचके".to_string()));
    assert_eq!(
        phrases::lookup("1200 sq ft", "mr", None),
        Some("१२०० चौ. फूट".to_string())
    );
}

#[test]
fn test_devanagari_digits() {
    assert_eq!(phrases::to_devanagari_digits("0123456789"), "०१२३४५६७८९");
    assert_eq!(phrases::to_devanagari_digits("Flat 42"), "Flat ४२");
}
