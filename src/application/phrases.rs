// Static phrase table: common English UI strings with fixed Marathi
// translations, consulted after a cache miss and before any remote call.
// Resolves synchronously; no storage or network access.
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Keyed by (source text, context). Context-specific entries take
/// precedence over the context-free entry for the same text.
static PHRASES: Lazy<HashMap<(&'static str, Option<&'static str>), &'static str>> =
    Lazy::new(|| {
        let mut m = HashMap::new();

        // Navigation and chrome
        m.insert(("Home", None), "मुख्यपृष्ठ");
        m.insert(("Properties", None), "मालमत्ता");
        m.insert(("Featured Properties", None), "वैशिष्ट्यीकृत मालमत्ता");
        m.insert(("About Us", None), "आमच्याबद्दल");
        m.insert(("Contact Us", None), "संपर्क करा");
        m.insert(("Search", None), "शोधा");
        m.insert(("Login", None), "लॉगिन");
        m.insert(("Logout", None), "लॉगआउट");
        m.insert(("Dashboard", None), "डॅशबोर्ड");
        m.insert(("Settings", None), "सेटिंग्ज");
        m.insert(("Admin", None), "प्रशासक");

        // Actions
        m.insert(("Submit", None), "सबमिट करा");
        m.insert(("Cancel", None), "रद्द करा");
        m.insert(("Save", None), "जतन करा");
        m.insert(("View Details", None), "तपशील पहा");
        m.insert(("Next", None), "पुढे");
        m.insert(("Previous", None), "मागे");
        m.insert(("Loading...", None), "लोड होत आहे...");
        m.insert(("No results found", None), "कोणतेही निकाल आढळले नाहीत");

        // Listing vocabulary
        m.insert(("Buy", None), "खरेदी");
        m.insert(("Rent", None), "भाडे");
        m.insert(("Sell", None), "विक्री");
        m.insert(("Price", None), "किंमत");
        m.insert(("Location", None), "स्थान");
        m.insert(("Area", None), "क्षेत्रफळ");
        m.insert(("Bedrooms", None), "शयनकक्ष");
        m.insert(("Bathrooms", None), "स्नानगृहे");
        m.insert(("Amenities", None), "सुविधा");
        m.insert(("Apartment", None), "अपार्टमेंट");
        m.insert(("Villa", None), "व्हिला");
        m.insert(("Plot", None), "भूखंड");
        m.insert(("Residential", None), "निवासी");
        m.insert(("Commercial", None), "व्यावसायिक");

        // Same text, different UI role
        m.insert(("List", None), "यादी");
        m.insert(("List", Some("action")), "सूचीबद्ध करा");
        m.insert(("Book", None), "पुस्तक");
        m.insert(("Book", Some("action")), "बुक करा");

        m
    });

/// Look up a fixed translation. Only the Marathi table exists; any other
/// target language is always a miss.
pub fn lookup(text: &str, target_lang: &str, context: Option<&str>) -> Option<String> {
    if target_lang != "mr" {
        return None;
    }

    if let Some(ctx) = context {
        if let Some(hit) = PHRASES.get(&(text, Some(ctx))) {
            return Some((*hit).to_string());
        }
    }
    if let Some(hit) = PHRASES.get(&(text, None)) {
        return Some((*hit).to_string());
    }

    pattern_lookup(text)
}

/// Simple patterns: bare numbers, `N BHK`, and `N sq ft`, rendered with
/// Devanagari digits.
fn pattern_lookup(text: &str) -> Option<String> {
    if is_numeric(text) {
        return Some(to_devanagari_digits(text));
    }

    if let Some(prefix) = strip_unit_suffix(text, &["BHK"]) {
        if is_numeric(prefix) {
            return Some(format!("{} बीएचके", to_devanagari_digits(prefix)));
        }
    }

    if let Some(prefix) = strip_unit_suffix(text, &["sq ft", "sqft", "sq. ft."]) {
        if is_numeric(prefix) {
            return Some(format!("{} चौ. फूट", to_devanagari_digits(prefix)));
        }
    }

    None
}

/// Digits with optional thousands separators or a decimal point.
fn is_numeric(text: &str) -> bool {
    !text.is_empty()
        && text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}

fn strip_unit_suffix<'a>(text: &'a str, units: &[&str]) -> Option<&'a str> {
    for unit in units {
        if let Some(rest) = text.strip_suffix(unit) {
            return Some(rest.trim_end());
        }
    }
    None
}

/// ASCII digits to Devanagari; everything else passes through.
pub fn to_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => {
                let offset = c as u32 - '0' as u32;
                char::from_u32('\u{0966}' as u32 + offset).unwrap_or(c)
            }
            other => other,
        })
        .collect()
}
