//! Formula Recognition
//!
//! Classifies raw input once so the pipeline can pick a single path:
//! a table bypass for exact formulas, the normalizer for short algebra,
//! or the gloss generator for everything else.

use crate::core::text_normalizer::strip_formula;
use crate::tables::concepts::{QUESTION_OPENERS, STEM_CONCEPTS};
use crate::tables::formulas::{chemical_expansion, formula_context, PHYSICS_FORMULAS};
use crate::tables::symbols::ALGEBRA_CHARS;
use serde::Serialize;
use tracing::debug;

/// Inputs with fewer words than this skip the language model when algebraic
const ALGEBRA_BYPASS_WORDS: usize = 10;

/// How an input should be handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// Exact chemical formula; `key` indexes the chemical table
    ChemicalFormula { key: String },
    /// Exact physics formula under its natural key
    PhysicsFormula {
        key: String,
        context_key: Option<String>,
    },
    /// Contains operator characters; short inputs bypass the language model
    Algebraic {
        context_key: Option<String>,
        bypass: bool,
    },
    /// Mentions a STEM concept or opens with a question
    Conceptual { context_key: String },
    FreeText,
}

/// Formula metadata attached to a translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormulaTag {
    pub input: String,
    pub key: Option<String>,
}

impl Classification {
    /// Whether the input should be offered for explanation
    pub fn is_formula(&self) -> bool {
        !matches!(self, Classification::FreeText)
    }

    /// Whether tokens come from tables or the normalizer alone
    pub fn bypasses_llm(&self) -> bool {
        match self {
            Classification::ChemicalFormula { .. } | Classification::PhysicsFormula { .. } => {
                true
            }
            Classification::Algebraic { bypass, .. } => *bypass,
            _ => false,
        }
    }

    /// Key into the explanation tables, when one applies
    pub fn context_key(&self) -> Option<&str> {
        match self {
            Classification::ChemicalFormula { key } => Some(key),
            Classification::PhysicsFormula { context_key, .. } => context_key.as_deref(),
            Classification::Algebraic { context_key, .. } => context_key.as_deref(),
            Classification::Conceptual { context_key } => Some(context_key),
            Classification::FreeText => None,
        }
    }

    pub fn formula_tag(&self, input: &str) -> Option<FormulaTag> {
        self.is_formula().then(|| FormulaTag {
            input: input.trim().to_string(),
            key: self.context_key().map(str::to_string),
        })
    }
}

/// Classify trimmed input
pub fn classify(text: &str) -> Classification {
    let text = text.trim();
    let key: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    if chemical_expansion(&key).is_some() {
        debug!("Chemical formula bypass for '{}'", text);
        return Classification::ChemicalFormula { key };
    }

    let stripped = strip_formula(text);
    if let Some((formula, _)) = PHYSICS_FORMULAS.iter().find(|(f, _)| *f == stripped) {
        debug!("Physics formula bypass for '{}' as '{}'", text, formula);
        return Classification::PhysicsFormula {
            key: formula.to_string(),
            context_key: formula_context(formula).map(|_| formula.to_string()),
        };
    }

    let lower = text.to_lowercase();
    let concept = matching_concept(&lower);
    let is_question = QUESTION_OPENERS.iter().any(|q| lower.starts_with(q));
    let is_algebra = text.contains(ALGEBRA_CHARS);

    let explained_key = concept
        .map(str::to_string)
        .or_else(|| is_question.then(|| lower.clone()));

    if is_algebra {
        let context_key = explained_key.or_else(|| algebraic_context_key(&key));
        let bypass = text.split_whitespace().count() < ALGEBRA_BYPASS_WORDS;
        return Classification::Algebraic {
            context_key,
            bypass,
        };
    }

    match explained_key {
        Some(context_key) => Classification::Conceptual { context_key },
        None => Classification::FreeText,
    }
}

/// Longest concept keyword contained in the input
fn matching_concept(lower: &str) -> Option<&'static str> {
    STEM_CONCEPTS
        .iter()
        .copied()
        .filter(|concept| lower.contains(concept))
        .fold(None, |best: Option<&'static str>, concept| match best {
            Some(b) if b.len() >= concept.len() => Some(b),
            _ => Some(concept),
        })
}

fn algebraic_context_key(key: &str) -> Option<String> {
    if key.contains("(a+b)2") {
        Some("(a+b)2".to_string())
    } else if key.contains("h2o") && key.contains("co2") {
        Some("h2o+co2".to_string())
    } else {
        None
    }
}
