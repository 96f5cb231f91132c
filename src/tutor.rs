//! STEM Tutor
//!
//! Step-by-step formula explanations, short answers to student questions,
//! and definition/formula/example structuring. Every piece of text shown to
//! the student is also rendered as a sign sequence.

use crate::core::gloss::Language;
use crate::core::llm::{extract_json_object, CompletionRequest, CompletionService, LlmError};
use crate::core::pipeline::{SignSequence, Translator};
use crate::error::{SignError, SignResult};
use crate::history::HistoryEntry;
use crate::tables::{formula_context, FormulaContext};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

const EXPLAIN_SYSTEM: &str = "You are a STEM teacher for deaf students. Explain complex concepts or formulas in very simple language. Be concise. Break it down into clear steps.";

const ASK_SYSTEM: &str = "You are a helpful STEM tutor. Give very short, simple answers in 1-2 sentences maximum. Use easy words. No jargon. Explain like you're talking to a 10 year old.";

const STRUCTURE_SYSTEM: &str = r#"You are a STEM content structurer. Given educational text, split it into exactly 3 sections.
Return ONLY valid JSON with this format:
{"definition": "simple explanation of the concept", "formula": "the mathematical formula or equation if any, otherwise empty string", "example": "a practical example or application"}
Keep each section short (1-2 sentences max). If there's no formula, put empty string. Always return valid JSON."#;

#[derive(Debug, Clone, Serialize)]
pub struct ExplanationStep {
    pub label: String,
    pub text: String,
    pub gloss: Vec<String>,
    pub signs: SignSequence,
}

#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub formula: String,
    pub formula_name: String,
    pub steps: Vec<ExplanationStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub question: String,
    pub answer: String,
    pub gloss: Vec<String>,
    pub signs: SignSequence,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredContent {
    pub definition: String,
    pub formula: String,
    pub example: String,
}

impl StructuredContent {
    fn unstructured(text: &str) -> Self {
        Self {
            definition: text.to_string(),
            ..Self::default()
        }
    }
}

/// Model-authored explanation, same shape as the built-in contexts
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ModelExplanation {
    name: String,
    /// Keeps the model's order
    variables: serde_json::Map<String, serde_json::Value>,
    meaning: String,
    example: String,
}

pub struct Tutor {
    translator: Arc<Translator>,
}

impl Tutor {
    pub fn new(translator: Arc<Translator>) -> Self {
        Self { translator }
    }

    fn service(&self) -> Result<&Arc<dyn CompletionService>, LlmError> {
        self.translator.glosser().service().ok_or(LlmError::Disabled)
    }

    /// Explain a formula, from the built-in context when `key` has one
    pub async fn explain(
        &self,
        formula: &str,
        key: Option<&str>,
        language: Language,
    ) -> SignResult<Explanation> {
        let formula = formula.trim();
        if formula.is_empty() {
            return Err(SignError::EmptyInput);
        }

        let context = key.and_then(formula_context);
        let (formula_name, steps) = match context {
            Some(ctx) => {
                info!("📘 Using built-in explanation for '{}'", formula);
                (ctx.name.to_string(), context_steps(ctx))
            }
            None => {
                info!("🧠 Asking the language model to explain '{}'", formula);
                let raw = self.service()?.complete(&explain_request(formula)).await?;
                debug!("Explanation raw: {}", raw);
                (formula.to_string(), model_steps(formula, &raw))
            }
        };

        let steps = join_all(
            steps
                .into_iter()
                .map(|(label, text)| self.render_step(label, text, language)),
        )
        .await;
        info!("📘 Generated {} explanation steps", steps.len());

        Ok(Explanation {
            formula: formula.to_string(),
            formula_name,
            steps,
        })
    }

    /// Short answer to a student question, rendered and recorded
    pub async fn ask(&self, question: &str, language: Language) -> SignResult<Answer> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SignError::EmptyInput);
        }

        let request = CompletionRequest {
            system: ASK_SYSTEM.to_string(),
            prompt: question.to_string(),
            temperature: 0.3,
            max_tokens: 150,
        };
        let answer = self.service()?.complete(&request).await?;
        info!("💬 Answer to '{}': {}", question, answer);

        let gloss = self.translator.gloss_prose(&answer, language).await;
        let signs = self.translator.translate_gloss(&gloss);
        self.translator.record(
            &HistoryEntry::new(question, language, gloss.join(" "), signs.display())
                .with_answer(answer.clone()),
        );

        Ok(Answer {
            question: question.to_string(),
            answer,
            gloss,
            signs,
        })
    }

    /// Split text into definition, formula and example; never fails
    pub async fn structure(&self, text: &str) -> StructuredContent {
        let text = text.trim();
        match self.try_structure(text).await {
            Ok(content) => content,
            Err(e) => {
                warn!("⚠️ Structuring failed, returning text as definition: {}", e);
                StructuredContent::unstructured(text)
            }
        }
    }

    async fn try_structure(&self, text: &str) -> Result<StructuredContent, LlmError> {
        let request = CompletionRequest {
            system: STRUCTURE_SYSTEM.to_string(),
            prompt: format!("Structure this STEM content:\n\n{text}"),
            temperature: 0.1,
            max_tokens: 400,
        };
        let raw = self.service()?.complete(&request).await?;
        debug!("Structure raw: {}", raw);

        let json = extract_json_object(&raw)
            .ok_or_else(|| LlmError::Malformed("no JSON object in answer".to_string()))?;
        serde_json::from_str(json).map_err(|e| LlmError::Malformed(e.to_string()))
    }

    async fn render_step(&self, label: String, text: String, language: Language) -> ExplanationStep {
        let gloss = self.translator.gloss_prose(&text, language).await;
        let signs = self.translator.translate_gloss(&gloss);
        ExplanationStep {
            label,
            text,
            gloss,
            signs,
        }
    }
}

fn explain_request(formula: &str) -> CompletionRequest {
    CompletionRequest {
        system: EXPLAIN_SYSTEM.to_string(),
        prompt: format!(
            r#"Explain this STEM concept or formula step by step: {formula}

Respond in this EXACT JSON format:
{{
  "name": "Concept name",
  "variables": {{"Part 1": "Brief explanation of first component"}},
  "meaning": "One sentence simple explanation of the whole thing",
  "example": "A real world example"
}}

If it's a general concept (like Photosynthesis) rather than a math formula, use the 'variables' section to break down the main parts or steps of the process."#
        ),
        temperature: 0.3,
        max_tokens: 400,
    }
}

fn context_steps(ctx: &FormulaContext) -> Vec<(String, String)> {
    let variables = ctx
        .variables
        .iter()
        .map(|(var, meaning)| (var.to_string(), meaning.to_string()));
    framed_steps(ctx.name, variables, ctx.meaning, ctx.example)
}

fn model_steps(formula: &str, raw: &str) -> Vec<(String, String)> {
    let parsed = extract_json_object(raw)
        .and_then(|json| serde_json::from_str::<ModelExplanation>(json).ok());
    let Some(parsed) = parsed else {
        return vec![("📌 Explanation".to_string(), raw.to_string())];
    };

    let name = if parsed.name.trim().is_empty() {
        formula
    } else {
        parsed.name.as_str()
    };
    let variables = parsed.variables.iter().map(|(var, meaning)| {
        let meaning = match meaning {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        (var.clone(), meaning)
    });
    framed_steps(name, variables, &parsed.meaning, &parsed.example)
}

/// What is this, one step per variable, why, example
fn framed_steps(
    name: &str,
    variables: impl Iterator<Item = (String, String)>,
    meaning: &str,
    example: &str,
) -> Vec<(String, String)> {
    let mut steps = vec![("📌 What is this?".to_string(), format!("This is {name}."))];
    steps.extend(variables.map(|(var, meaning)| (format!("🔤 {var} means"), meaning)));
    steps.push(("🧠 Why?".to_string(), meaning.to_string()));
    steps.push(("🌍 Real-world Example".to_string(), example.to_string()));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_steps_frame() {
        let ctx = formula_context("f=ma").expect("f=ma has context");
        let steps = context_steps(ctx);
        assert_eq!(steps.len(), ctx.variables.len() + 3);
        assert_eq!(steps[0].1, format!("This is {}.", ctx.name));
        assert_eq!(steps.last().map(|s| s.1.as_str()), Some(ctx.example));
    }

    #[test]
    fn test_model_steps_from_json() {
        let raw = r#"Here you go: {"name": "Ohm's law", "variables": {"V": "voltage"}, "meaning": "More push, more flow.", "example": "A torch."}"#;
        let steps = model_steps("V=IR", raw);
        let labels: Vec<&str> = steps.iter().map(|s| s.0.as_str()).collect();
        assert_eq!(
            labels,
            vec!["📌 What is this?", "🔤 V means", "🧠 Why?", "🌍 Real-world Example"]
        );
        assert_eq!(steps[0].1, "This is Ohm's law.");
    }

    #[test]
    fn test_model_steps_keep_variable_order() {
        let raw = r#"{"name": "Momentum", "variables": {"p": "momentum", "m": "mass", "v": "velocity"}}"#;
        let labels: Vec<String> = model_steps("p = mv", raw)
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels[1..4], ["🔤 p means", "🔤 m means", "🔤 v means"]);
    }

    #[test]
    fn test_model_steps_without_json() {
        let steps = model_steps("x", "It is just a letter.");
        assert_eq!(
            steps,
            vec![(
                "📌 Explanation".to_string(),
                "It is just a letter.".to_string()
            )]
        );
    }

    #[test]
    fn test_model_steps_missing_name_uses_formula() {
        let steps = model_steps("p=mv", r#"{"meaning": "momentum"}"#);
        assert_eq!(steps[0].1, "This is p=mv.");
        assert_eq!(steps.len(), 3);
    }
}
