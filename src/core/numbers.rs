//! Number Speller
//!
//! Spells numbers as sign-friendly uppercase words. Magnitudes below 1000 are
//! decomposed (`ONE HUNDRED FIVE`); anything larger is spelled digit by digit,
//! as are the digits after a decimal point.

const ONES: [&str; 21] = [
    "ZERO",
    "ONE",
    "TWO",
    "THREE",
    "FOUR",
    "FIVE",
    "SIX",
    "SEVEN",
    "EIGHT",
    "NINE",
    "TEN",
    "ELEVEN",
    "TWELVE",
    "THIRTEEN",
    "FOURTEEN",
    "FIFTEEN",
    "SIXTEEN",
    "SEVENTEEN",
    "EIGHTEEN",
    "NINETEEN",
    "TWENTY",
];

const TENS: [&str; 10] = [
    "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];

/// Spell an integer
pub fn spell_integer(n: i64) -> String {
    if n < 0 {
        return format!("MINUS {}", spell_magnitude(n.unsigned_abs()));
    }
    spell_magnitude(n as u64)
}

fn spell_magnitude(n: u64) -> String {
    match n {
        0..=20 => ONES[n as usize].to_string(),
        21..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{} {}", tens, ONES[ones as usize]),
            }
        }
        100..=999 => {
            let mut words = format!("{} HUNDRED", ONES[(n / 100) as usize]);
            let remainder = n % 100;
            if remainder > 0 {
                words.push(' ');
                words.push_str(&spell_magnitude(remainder));
            }
            words
        }
        _ => spell_digits(&n.to_string()),
    }
}

/// Spell every character individually; non-digits pass through uppercased
pub fn spell_digits(digits: &str) -> String {
    digits
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => ONES[d as usize].to_string(),
            None => c.to_uppercase().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spell a numeric string: integers, negatives and decimals
pub fn number_to_words(num: &str) -> String {
    let num = num.trim();

    if let Some(magnitude) = num.strip_prefix('-') {
        if !magnitude.is_empty() {
            return format!("MINUS {}", number_to_words(magnitude));
        }
    }

    if let Some((whole, fraction)) = num.split_once('.') {
        let mut parts = Vec::new();
        if !whole.is_empty() {
            parts.push(number_to_words(whole));
        }
        parts.push("POINT".to_string());
        if !fraction.is_empty() {
            parts.push(spell_digits(fraction));
        }
        return parts.join(" ");
    }

    if !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()) {
        return match num.parse::<u64>() {
            Ok(n) if n < 1000 => spell_magnitude(n),
            _ => spell_digits(num),
        };
    }

    spell_digits(num)
}

/// Decode a spelled number back to its value (0-999, optionally negative)
pub fn words_to_number(words: &[&str]) -> Option<i64> {
    let (negative, words) = match words.split_first() {
        Some((first, rest)) if first.eq_ignore_ascii_case("MINUS") => (true, rest),
        _ => (false, words),
    };
    if words.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for word in words {
        let word = word.to_uppercase();
        if word == "HUNDRED" {
            value = value.max(1) * 100;
        } else if let Some(n) = ONES.iter().position(|w| *w == word) {
            value += n as i64;
        } else if let Some(n) = TENS.iter().position(|w| !w.is_empty() && *w == word) {
            value += n as i64 * 10;
        } else {
            return None;
        }
    }

    Some(if negative { -value } else { value })
}
