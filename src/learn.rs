//! Learning Mode
//!
//! Curated sign categories for practice, and multiple-choice quizzes where
//! the avatar signs a word and the student picks it from four options.

use crate::core::pipeline::SignSequence;
use crate::core::resolver::SignResolver;
use crate::error::{SignError, SignResult};
use crate::lexicon::Lexicon;
use crate::utils::fuzzy::find_best_match;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

const QUIZ_OPTIONS: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct SignCategory {
    pub name: &'static str,
    pub icon: &'static str,
    /// Every word must be in the lexicon with an asset
    pub words: &'static [&'static str],
}

pub const SIGN_CATEGORIES: &[SignCategory] = &[
    SignCategory {
        name: "Greetings",
        icon: "🤝",
        words: &["hello", "goodbye", "bye", "welcome", "sorry", "please", "thankyou"],
    },
    SignCategory {
        name: "Numbers",
        icon: "🔢",
        words: &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"],
    },
    SignCategory {
        name: "Family",
        icon: "👨‍👩‍👧",
        words: &[
            "mother", "father", "sister", "brother", "baby", "family", "friend", "man", "girl",
            "child",
        ],
    },
    SignCategory {
        name: "Colors",
        icon: "🎨",
        words: &["red", "blue", "green", "yellow", "white", "black", "orange", "pink"],
    },
    SignCategory {
        name: "Actions",
        icon: "🏃",
        words: &[
            "walk", "run", "eat", "drink", "sleep", "sit", "stand", "dance", "jump", "swim",
            "cook", "read", "write", "play",
        ],
    },
    SignCategory {
        name: "Time",
        icon: "🕐",
        words: &[
            "today",
            "tomorrow",
            "yesterday",
            "morning",
            "night",
            "afternoon",
            "evening",
            "week",
            "month",
            "year",
            "now",
        ],
    },
    SignCategory {
        name: "Feelings",
        icon: "😊",
        words: &[
            "happy", "sad", "angry", "tired", "good", "bad", "love", "like", "hungry", "afraid",
            "sick", "cry", "laugh",
        ],
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub name: &'static str,
    pub icon: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeWord {
    pub word: String,
    pub signs: SignSequence,
}

#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    pub question_word: String,
    pub signs: SignSequence,
    pub options: Vec<String>,
    pub correct_index: usize,
}

pub fn categories() -> Vec<CategorySummary> {
    SIGN_CATEGORIES
        .iter()
        .map(|c| CategorySummary {
            name: c.name,
            icon: c.icon,
            count: c.words.len(),
        })
        .collect()
}

/// Case-insensitive lookup, with a suggestion on a miss
pub fn category(name: &str) -> SignResult<&'static SignCategory> {
    let wanted = name.trim();
    if let Some(found) = SIGN_CATEGORIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(wanted))
    {
        return Ok(found);
    }

    let names: Vec<&str> = SIGN_CATEGORIES.iter().map(|c| c.name).collect();
    let suggestion = find_best_match(wanted, &names, 0.5).map(|m| m.value);
    Err(SignError::UnknownCategory {
        name: wanted.to_string(),
        suggestion,
    })
}

/// Category words as resolved against the assets; missing signs are spelled
pub fn words(name: &str, resolver: &SignResolver) -> SignResult<Vec<PracticeWord>> {
    let category = category(name)?;
    Ok(category
        .words
        .iter()
        .map(|w| PracticeWord {
            word: w.to_string(),
            signs: resolve_word(resolver, w).0,
        })
        .collect())
}

/// One correct word and three distractors, shuffled.
/// Only words with a whole sign take part.
pub fn quiz<R: Rng + ?Sized>(
    name: &str,
    resolver: &SignResolver,
    rng: &mut R,
) -> SignResult<Quiz> {
    let category = category(name)?;
    let signable: Vec<String> = category
        .words
        .iter()
        .filter(|w| resolve_word(resolver, w).1)
        .map(|w| w.to_string())
        .collect();
    if signable.len() < category.words.len() {
        debug!(
            "{} of {} '{}' words have a sign",
            signable.len(),
            category.words.len(),
            category.name
        );
    }

    let correct = signable.choose(rng).cloned().ok_or_else(|| {
        SignError::Lexicon(format!("no word in '{}' has a sign", category.name))
    })?;

    let mut pool = signable;
    if pool.len() < QUIZ_OPTIONS {
        let extras: Vec<String> = resolver
            .lexicon()
            .sorted()
            .into_iter()
            .filter(|w| !pool.contains(w) && resolve_word(resolver, w).1)
            .collect();
        let needed = QUIZ_OPTIONS - pool.len();
        if extras.len() < needed {
            return Err(SignError::Lexicon(format!(
                "not enough words to build a quiz for '{}'",
                category.name
            )));
        }
        debug!("Padding '{}' quiz pool with {} lexicon words", category.name, needed);
        pool.extend(extras.choose_multiple(rng, needed).cloned());
    }

    let others: Vec<&String> = pool.iter().filter(|w| **w != correct).collect();
    let mut options: Vec<String> = others
        .choose_multiple(rng, QUIZ_OPTIONS - 1)
        .map(|w| (*w).clone())
        .collect();
    options.push(correct.clone());
    options.shuffle(rng);

    let correct_index = options
        .iter()
        .position(|w| *w == correct)
        .unwrap_or_default();

    Ok(Quiz {
        signs: resolve_word(resolver, &correct).0,
        question_word: correct,
        options,
        correct_index,
    })
}

/// Category words missing from the lexicon
pub fn validate_categories(lexicon: &Lexicon) -> Vec<(&'static str, &'static str)> {
    let mut missing = Vec::new();
    for category in SIGN_CATEGORIES {
        for word in category.words {
            if !lexicon.contains(word) {
                warn!(
                    "⚠️ Category '{}' has word '{}' not in the vocabulary",
                    category.name, word
                );
                missing.push((category.name, *word));
            }
        }
    }
    missing
}

/// Signs for `word`, and whether it got a whole sign rather than spelling
fn resolve_word(resolver: &SignResolver, word: &str) -> (SignSequence, bool) {
    let resolved = resolver.resolve(&[word.to_string()]);
    let whole = !resolved.is_empty() && resolved.iter().all(|r| !r.is_fingerspelled());
    (SignSequence::from_resolved(&resolved), whole)
}
