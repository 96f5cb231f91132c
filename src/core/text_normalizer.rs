//! Symbolic Normalization
//!
//! Rewrites formulas, numbers, Greek letters and operators into uppercase,
//! space-separated sign tokens. Passes run in a fixed order, each on the
//! output of the previous one.

use crate::core::numbers::number_to_words;
use crate::tables::formulas::{CHEM_FORMULAS, PHYSICS_FORMULAS};
use crate::tables::symbols::{GREEK_LETTERS, MATH_OPERATORS, SUBSCRIPT_DIGITS};
use lazy_static::lazy_static;
use regex::{Captures, NoExpand, Regex};
use tracing::debug;

lazy_static! {
    /// Physics formulas, tolerant of spacing, carets and superscripts
    static ref PHYSICS_PATTERNS: Vec<(&'static str, Regex, &'static str)> = PHYSICS_FORMULAS
        .iter()
        .map(|(key, expansion)| (*key, flexible_formula_pattern(key), *expansion))
        .collect();

    /// Chemical formulas as whole words, case-insensitive
    static ref CHEM_PATTERNS: Vec<(Regex, &'static str)> = CHEM_FORMULAS
        .iter()
        .map(|(key, expansion)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(key));
            (Regex::new(&pattern).unwrap(), *expansion)
        })
        .collect();

    /// `2ab` style coefficients
    static ref COEFFICIENT_REGEX: Regex = Regex::new(r"([0-9]+)([a-zA-Z]+)").unwrap();

    /// `x2` or `)3` style exponents
    static ref EXPONENT_REGEX: Regex = Regex::new(r"([a-zA-Z]|\))([0-9]+)").unwrap();

    static ref LONE_LETTER_REGEX: Regex = Regex::new(r"\b[a-z]\b").unwrap();

    static ref NUMBER_REGEX: Regex = Regex::new(r"\b[0-9]+\.?[0-9]*\b").unwrap();

    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Pattern for a physics key that also matches `E = mc^2` and `E=mc²`.
/// Keys that start or end with a letter only match whole words.
fn flexible_formula_pattern(key: &str) -> Regex {
    let pieces: Vec<String> = key
        .chars()
        .map(|c| match c {
            '2' => r"(?:\^?\s*2|²)".to_string(),
            '3' => r"(?:\^?\s*3|³)".to_string(),
            d if d.is_ascii_digit() => format!(r"\^?\s*{d}"),
            other => regex::escape(&other.to_string()),
        })
        .collect();
    let boundary = |c: Option<char>| match c {
        Some(c) if c.is_alphabetic() => r"\b",
        _ => "",
    };
    let pattern = format!(
        "(?i){}{}{}",
        boundary(key.chars().next()),
        pieces.join(r"\s*"),
        boundary(key.chars().last())
    );
    Regex::new(&pattern).unwrap()
}

/// Lowercased, whitespace/caret-free, superscripts folded to digits
pub fn strip_formula(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '^')
        .map(|c| match c {
            '²' => '2',
            '³' => '3',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Run every normalization pass over `text`
pub fn normalize(text: &str) -> String {
    // 1. A physics formula found in the text short-circuits the generic rules
    for (key, pattern, expansion) in PHYSICS_PATTERNS.iter() {
        if pattern.is_match(text) {
            debug!("Physics formula '{}' matched", key);
            let replaced = pattern.replace_all(text, NoExpand(*expansion));
            return collapse_whitespace(&replaced);
        }
    }

    // 2. Chemical formulas
    let mut text = text.to_string();
    for (pattern, expansion) in CHEM_PATTERNS.iter() {
        if pattern.is_match(&text) {
            text = pattern.replace_all(&text, NoExpand(*expansion)).into_owned();
        }
    }

    // 3. Greek letters
    for (letter, name) in GREEK_LETTERS {
        if text.contains(*letter) {
            text = text.replace(*letter, &format!(" {name} "));
        }
    }

    // 4. Subscripts stay apart from their base so they read as plain numbers
    for (sub, digit) in SUBSCRIPT_DIGITS {
        if text.contains(*sub) {
            text = text.replace(*sub, &format!(" {digit}"));
        }
    }

    // 5. Coefficients: 2ab -> TWO A B
    text = COEFFICIENT_REGEX
        .replace_all(&text, |caps: &Captures| {
            let letters: Vec<String> = caps[2]
                .chars()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect();
            format!(" {} {} ", number_to_words(&caps[1]), letters.join(" "))
        })
        .into_owned();

    // 6. Exponents: x2 -> X SQUARE, x5 -> X POWER FIVE
    text = EXPONENT_REGEX
        .replace_all(&text, |caps: &Captures| {
            let base = caps[1].to_ascii_uppercase();
            let power = match &caps[2] {
                "2" => "SQUARE".to_string(),
                "3" => "CUBE".to_string(),
                exp => format!("POWER {}", number_to_words(exp)),
            };
            format!(" {base} {power} ")
        })
        .into_owned();

    // 7. Lone letters are variables
    text = LONE_LETTER_REGEX
        .replace_all(&text, |caps: &Captures| caps[0].to_uppercase())
        .into_owned();

    // 8. Operators
    for (op, word) in MATH_OPERATORS {
        if text.contains(op) {
            text = text.replace(op, &format!(" {word} "));
        }
    }

    // 9. Remaining numbers
    text = NUMBER_REGEX
        .replace_all(&text, |caps: &Captures| {
            format!(" {} ", number_to_words(&caps[0]))
        })
        .into_owned();

    // 10. Clean up
    collapse_whitespace(&text)
}

/// Normalize and split into tokens
pub fn tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_uppercase)
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chemical_formulas() {
        assert_eq!(normalize("h2o"), "H TWO O");
        assert_eq!(normalize("CO2"), "C O TWO");
        assert_eq!(normalize("Ca(OH)2"), "C A OPEN PAREN O H CLOSE PAREN TWO");
        assert_eq!(normalize("h2so4 is an acid"), "H TWO S O FOUR is an acid");
    }

    #[test]
    fn test_physics_formulas_any_spacing() {
        assert_eq!(normalize("F=ma"), "F EQUAL M A");
        assert_eq!(normalize("F = m a"), "F EQUAL M A");
        assert_eq!(normalize("E = mc^2"), "E EQUAL M C POWER TWO");
        assert_eq!(normalize("E=mc²"), "E EQUAL M C POWER TWO");
        assert_eq!(
            normalize("v^2 = u^2 + 2as"),
            "V POWER TWO EQUAL U POWER TWO ADD TWO A S"
        );
    }

    #[test]
    fn test_physics_formula_stops_further_rules() {
        assert_eq!(normalize("use F=ma twice"), "use F EQUAL M A twice");
    }

    #[test]
    fn test_embedded_physics_key_without_match_runs_all_rules() {
        // Caret before a letter is a power, not Ohm's law
        assert_eq!(normalize("v = i^r + 3x"), "V EQUAL I POWER R PLUS THREE X");
        assert_eq!(normalize("p = i^v"), "P EQUAL I POWER V");
        // f=ma must not fire inside words
        assert_eq!(normalize("5 apples if = mass"), "FIVE apples if EQUAL mass");
    }

    #[test]
    fn test_coefficients_and_exponents() {
        assert_eq!(normalize("2ab"), "TWO A B");
        assert_eq!(normalize("x2 + y3"), "X SQUARE PLUS Y CUBE");
        assert_eq!(normalize("x5"), "X POWER FIVE");
        assert_eq!(normalize("x^5"), "X POWER FIVE");
        assert_eq!(
            normalize("(a+b)2"),
            "OPEN BRACKET A PLUS B CLOSE BRACKET SQUARE"
        );
    }

    #[test]
    fn test_greek_and_subscripts() {
        assert_eq!(normalize("α + β"), "ALPHA PLUS BETA");
        assert_eq!(normalize("x₁ + x₂"), "X ONE PLUS X TWO");
        assert_eq!(normalize("H₂O"), "H TWO O");
        assert_eq!(normalize("Δ = 5"), "DELTA EQUAL FIVE");
    }

    #[test]
    fn test_operators_longest_first() {
        assert_eq!(normalize("a >= b"), "A GREATER EQUAL B");
        assert_eq!(normalize("a != b"), "A NOT EQUAL B");
        assert_eq!(normalize("a < b"), "A LESS B");
        assert_eq!(normalize("√x"), "SQUARE ROOT X");
    }

    #[test]
    fn test_residual_numbers() {
        assert_eq!(normalize("3.14"), "THREE POINT ONE FOUR");
        assert_eq!(normalize("-5"), "MINUS FIVE");
        assert_eq!(normalize("add 25 and 105"), "add TWENTY FIVE and ONE HUNDRED FIVE");
        assert_eq!(normalize("1000"), "ONE ZERO ZERO ZERO");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        for input in [
            "h2o",
            "E = mc^2",
            "2ab + x2",
            "(a+b)2",
            "α ≤ 3.5",
            "x₁ - 7 = 12",
            "the boy eats 3 apples",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input}");
        }
    }

    #[test]
    fn test_tokens() {
        assert_eq!(tokens("h2o"), vec!["H", "TWO", "O"]);
        assert!(tokens("   ").is_empty());
    }
}
