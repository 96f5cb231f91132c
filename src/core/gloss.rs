//! Gloss Generation
//!
//! Turns (normalized) English into an uppercase gloss token sequence using
//! the language model, with a deterministic local fallback whenever the
//! service is missing, fails, or answers with nothing usable.

use crate::core::llm::{CompletionRequest, CompletionService, LlmError};
use crate::core::text_normalizer::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Label prefixes models like to put in front of the gloss
const LABEL_PREFIXES: &[&str] = &[
    "ASL:",
    "ISL:",
    "GLOSS:",
    "OUTPUT:",
    "ANSWER:",
    "ISL GLOSS:",
    "ASL GLOSS:",
];

/// Dropped by the local fallback
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "am", "are", "was", "were", "be", "been", "do", "does", "did",
    "will", "would", "can", "could", "shall", "should", "may", "might", "must", "have", "has",
    "had", "to", "of", "for", "it",
];

/// Target sign language grammar
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Indian Sign Language: Subject-Object-Verb
    #[default]
    Isl,
    /// American Sign Language: English word order
    Asl,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Isl => "isl",
            Language::Asl => "asl",
        }
    }

    /// Parse, defaulting to ISL for anything unrecognised
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "isl" => Ok(Language::Isl),
            "asl" => Ok(Language::Asl),
            other => Err(format!("unknown sign language '{other}'")),
        }
    }
}

pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::Isl => "You are an ISL (Indian Sign Language) expert. You MUST use SOV (Subject-Object-Verb) grammar. The verb ALWAYS comes last. Output ONLY UPPERCASE gloss words. No explanations.",
        Language::Asl => "You are an ASL (American Sign Language) expert. You MUST keep the EXACT English word order. DO NOT REARRANGE. Output ONLY UPPERCASE gloss words. No explanations.",
    }
}

pub fn build_prompt(text: &str, language: Language) -> String {
    match language {
        Language::Asl => format!(
            r#"Convert this English text to ASL gloss. Output ONLY one line of UPPERCASE words. Do NOT repeat or duplicate any part.

Rules:
1. Keep the EXACT same word order as the English sentence.
2. Remove ONLY: THE, A, AN, IS, AM, ARE, WAS, WERE, BE, BEEN.
3. DO NOT rearrange words. DO NOT repeat the output.

Examples:
"She asked an important question" -> SHE ASKED IMPORTANT QUESTION
"I eat food every day" -> I EAT FOOD EVERY DAY
"Hello John how are you" -> HELLO JOHN HOW YOU

Text: {text}
Gloss:"#
        ),
        Language::Isl => format!(
            r#"Task: Convert the English sentence to ISL (Indian Sign Language) gloss.

ISL grammar rules:
1. Word order MUST be: [Subject] [Time/Location] [Object] [Verb].
2. The subject comes FIRST.
3. The main verb ALWAYS comes LAST.
4. Remove: THE, A, AN, IS, AM, ARE, WAS, WERE, BE, BEEN.
5. Negation: put "NOT" after the verb at the very end.

Examples:
"I eat food every day" -> I FOOD EVERY DAY EAT
"She asked a question" -> GIRL QUESTION ASK
"The boy kicked the ball" -> BOY BALL KICK
"I don't understand" -> I UNDERSTAND NOT

Text: {text}
ISL Gloss:"#
        ),
    }
}

/// Request for a gloss, with determinism-favouring sampling
pub fn gloss_request(text: &str, language: Language) -> CompletionRequest {
    CompletionRequest {
        system: system_prompt(language).to_string(),
        prompt: build_prompt(text, language),
        temperature: 0.0,
        max_tokens: 300,
    }
}

/// Extract gloss tokens from a raw model answer
pub fn parse_response(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let line = raw
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('(') && !l.starts_with("Note"))
        .or_else(|| raw.lines().next().map(str::trim))
        .unwrap_or("");

    let mut line = line;
    for prefix in LABEL_PREFIXES {
        if let Some(head) = line.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                line = line[prefix.len()..].trim();
            }
        }
    }
    debug!("Gloss line: '{}'", line);

    let cleaned: String = line
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    let words = cleaned
        .split_whitespace()
        .map(|w| w.to_ascii_uppercase())
        .collect();

    truncate_repetition(words)
}

/// Cut echoed output: stop where the opening tokens start repeating
pub fn truncate_repetition(mut words: Vec<String>) -> Vec<String> {
    let len = words.len();
    if len < 4 {
        return words;
    }
    let half = len / 2;
    let start = half.saturating_sub(2).max(2);
    let end = (len - 1).min(half + 3);
    for split_at in start..end {
        let n = split_at.min(3);
        if split_at + n <= len && words[..n] == words[split_at..split_at + n] {
            debug!("Repetition detected at position {}, trimming", split_at);
            words.truncate(split_at);
            break;
        }
    }
    words
}

/// Local gloss: normalize, drop stop words, uppercase
pub fn fallback_gloss(text: &str) -> Vec<String> {
    let words: Vec<String> = normalize(text)
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(&w.to_lowercase().as_str()))
        .map(str::to_uppercase)
        .collect();
    if !words.is_empty() {
        return words;
    }
    text.split_whitespace()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .map(str::to_uppercase)
        .collect()
}

/// Gloss generator over an optional completion service
#[derive(Clone, Default)]
pub struct GlossGenerator {
    service: Option<Arc<dyn CompletionService>>,
}

impl GlossGenerator {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// Generator that always uses the local fallback
    pub fn offline() -> Self {
        Self { service: None }
    }

    pub fn service(&self) -> Option<&Arc<dyn CompletionService>> {
        self.service.as_ref()
    }

    /// Ask the service for a gloss; errors are returned, not hidden
    pub async fn try_generate(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Vec<String>, LlmError> {
        let service = self.service.as_ref().ok_or(LlmError::Disabled)?;
        let raw = service.complete(&gloss_request(text, language)).await?;
        debug!("🧠 Raw gloss response ({}): {}", language, raw);

        let words = parse_response(&raw);
        if words.is_empty() {
            return Err(LlmError::Empty);
        }
        Ok(words)
    }

    /// Gloss tokens for `text`; never fails
    pub async fn generate(&self, text: &str, language: Language) -> Vec<String> {
        match self.try_generate(text, language).await {
            Ok(words) => {
                info!("🤟 Gloss ({}): {}", language, words.join(" "));
                words
            }
            Err(LlmError::Disabled) => {
                debug!("Language model disabled, local gloss for '{}'", text);
                fallback_gloss(text)
            }
            Err(e) => {
                warn!(
                    "⚠️ Gloss generation failed for '{}' ({}), using local fallback: {}",
                    text, language, e
                );
                fallback_gloss(text)
            }
        }
    }
}
