//! Hotel naming and location lookup.
use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// Country of cities that are not in [COUNTRIES].
pub const UNKNOWN_COUNTRY: &str = "Unknown";

lazy_static! {
    /// Known source extensions, only stripped at the end of file names.
    static ref EXTENSIONS: Regex = Regex::new(r"\.(txt|csv|json|xml)$").unwrap();

    /// Country of each known city folder, keyed by lowercase folder name.
    pub static ref COUNTRIES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("beijing", "China");
        m.insert("shanghai", "China");
        m.insert("chicago", "USA");
        m.insert("las-vegas", "USA");
        m.insert("london", "UK");
        m.insert("montreal", "Canada");
        m.insert("new-delhi", "India");
        m.insert("new-york-city", "USA");
        m.insert("san-francisco", "USA");
        m
    };
}

/// Titlecase letters (Unicode category Lt): Latin digraphs.
const TITLECASE_LETTERS: [char; 4] = ['\u{01C5}', '\u{01C8}', '\u{01CB}', '\u{01F2}'];

/// Titlecase form of `c`, when it differs from the uppercase one.
fn special_titlecase(c: char) -> Option<&'static str> {
    match c {
        '\u{00DF}' => Some("Ss"),
        '\u{01C4}'..='\u{01C6}' => Some("\u{01C5}"),
        '\u{01C7}'..='\u{01C9}' => Some("\u{01C8}"),
        '\u{01CA}'..='\u{01CC}' => Some("\u{01CB}"),
        '\u{01F1}'..='\u{01F3}' => Some("\u{01F2}"),
        '\u{FB00}' => Some("Ff"),
        '\u{FB01}' => Some("Fi"),
        '\u{FB02}' => Some("Fl"),
        '\u{FB03}' => Some("Ffi"),
        '\u{FB04}' => Some("Ffl"),
        '\u{FB05}' | '\u{FB06}' => Some("St"),
        _ => None,
    }
}

/// Capitalize the first cased character of each word, lowercase the others.
///
/// A word starts after any character that has no case (spaces, digits, punctuation...),
/// so `hotel2go` becomes `Hotel2Go` and `o'neil` becomes `O'Neil`.
/// First characters use their titlecase form (`ß` gives `Ss`, `ǆ` gives `ǅ`) for
/// the sharp s, Latin digraphs and Latin ligatures, and their uppercase form otherwise.
pub fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase() || TITLECASE_LETTERS.contains(&c);
        if cased && previous_cased {
            titled.extend(c.to_lowercase());
        } else if cased {
            match special_titlecase(c) {
                Some(title) => titled.push_str(title),
                None => titled.extend(c.to_uppercase()),
            }
        } else {
            titled.push(c);
        }
        previous_cased = cased;
    }

    titled
}

/// Country of `city`, case-insensitive, or [UNKNOWN_COUNTRY].
pub fn country(city: &str) -> &'static str {
    COUNTRIES
        .get(city.to_lowercase().as_str())
        .copied()
        .unwrap_or(UNKNOWN_COUNTRY)
}

/// Derive a display name from a source file name.
///
/// Extension is stripped, separators become spaces and any occurrence of the city is removed.
/// Falls back to `Hotel in <City>` if nothing is left.
pub fn hotel_name(file_name: &str, city: &str) -> String {
    let name = EXTENSIONS.replace(file_name, "");
    let name = name.replace(['_', '-'], " ");

    let name = match RegexBuilder::new(&regex::escape(city))
        .case_insensitive(true)
        .build()
    {
        Ok(city_pattern) if !city.is_empty() => city_pattern.replace_all(&name, "").into_owned(),
        _ => name,
    };

    let name = title_case(name.trim());
    if name.is_empty() {
        format!("Hotel in {}", title_case(city))
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title() {
        assert_eq!(title_case("grand file"), "Grand File");
        assert_eq!(title_case("LE gRAND hôtel"), "Le Grand Hôtel");
        assert_eq!(title_case("new-york-city"), "New-York-City");
        assert_eq!(title_case("hotel2go o'neil"), "Hotel2Go O'Neil");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_uses_titlecase_forms() {
        assert_eq!(title_case("straße"), "Straße");
        assert_eq!(title_case("ßtraße"), "Sstraße");
        assert_eq!(title_case("\u{01C6}ak"), "\u{01C5}ak");
        assert_eq!(title_case("\u{01C4}AK"), "\u{01C5}ak");
        assert_eq!(title_case("\u{FB01}ne inn"), "Fine Inn");
    }

    #[test]
    fn countries() {
        assert_eq!(country("london"), "UK");
        assert_eq!(country("London"), "UK");
        assert_eq!(country("NEW-DELHI"), "India");
        assert_eq!(country("paris"), UNKNOWN_COUNTRY);
    }

    #[test]
    fn names() {
        assert_eq!(hotel_name("grand_file", "london"), "Grand File");
        assert_eq!(hotel_name("the-ritz.txt", "london"), "The Ritz");
        assert_eq!(hotel_name("London_Savoy_reviews.csv", "london"), "Savoy Reviews");
        assert_eq!(hotel_name("chicago_hotel_file", "chicago"), "Hotel File");
    }

    #[test]
    fn extension_only_at_end() {
        assert_eq!(hotel_name("notes.txt.bak", "paris"), "Notes.Txt.Bak");
        assert_eq!(hotel_name("data.XML", "paris"), "Data.Xml");
    }

    #[test]
    fn city_only() {
        assert_eq!(hotel_name("london.txt", "london"), "Hotel in London");
        assert_eq!(hotel_name("___", "las-vegas"), "Hotel in Las-Vegas");
    }

    #[test]
    fn hyphenated_city_is_not_removed() {
        // separators are replaced before the city is looked for
        assert_eq!(
            hotel_name("new-york-city_plaza", "new-york-city"),
            "New York City Plaza"
        );
    }
}
