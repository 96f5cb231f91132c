//! Translation Pipeline
//!
//! Classify once, produce gloss by exactly one path, resolve against the
//! assets, render the sign sequence and record it.

use crate::config::Config;
use crate::core::gloss::{GlossGenerator, Language};
use crate::core::llm::ChatClient;
use crate::core::recognizer::{classify, Classification, FormulaTag};
use crate::core::resolver::{ResolvedToken, SignResolver};
use crate::core::text_normalizer::{normalize, tokens};
use crate::error::{SignError, SignResult};
use crate::history::{HistoryEntry, HistoryStore};
use crate::lexicon::{AssetStore, Lexicon};
use crate::tables::{chemical_expansion, physics_expansion, SynonymTable};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ordered animation identifiers plus what to show the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignSequence {
    ids: Vec<String>,
    display: String,
    formula: Option<FormulaTag>,
}

impl SignSequence {
    pub fn from_resolved(resolved: &[ResolvedToken]) -> Self {
        let ids = resolved
            .iter()
            .flat_map(|r| r.ids())
            .map(str::to_string)
            .collect();
        let display = resolved
            .iter()
            .map(ResolvedToken::display)
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            ids,
            display,
            formula: None,
        }
    }

    pub fn with_formula(mut self, formula: Option<FormulaTag>) -> Self {
        self.formula = formula;
        self
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Identifier at 1-based `position`
    pub fn get(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.ids.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn formula(&self) -> Option<&FormulaTag> {
        self.formula.as_ref()
    }
}

/// `{"1": "water", "2": "h", ..., "_display": "..."}` plus formula metadata
impl Serialize for SignSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (i, id) in self.ids.iter().enumerate() {
            map.serialize_entry(&(i + 1).to_string(), id)?;
        }
        map.serialize_entry("_display", &self.display)?;
        if let Some(formula) = &self.formula {
            map.serialize_entry("_is_formula", &true)?;
            map.serialize_entry("_formula_input", &formula.input)?;
            if let Some(key) = &formula.key {
                map.serialize_entry("_formula_key", key)?;
            }
        }
        map.end()
    }
}

/// Result of one translation request
#[derive(Debug, Clone, serde::Serialize)]
pub struct Translation {
    pub input: String,
    pub language: Language,
    pub gloss: Vec<String>,
    pub classification: Classification,
    pub signs: SignSequence,
}

/// Text to sign sequence translator
pub struct Translator {
    resolver: SignResolver,
    glosser: GlossGenerator,
    history: Option<Arc<HistoryStore>>,
}

impl Translator {
    pub fn new(resolver: SignResolver, glosser: GlossGenerator) -> Self {
        Self {
            resolver,
            glosser,
            history: None,
        }
    }

    pub fn with_history(mut self, history: Arc<HistoryStore>) -> Self {
        self.history = Some(history);
        self
    }

    /// Wire up vocabulary, language model and history from config
    pub fn from_config(config: &Config) -> SignResult<Self> {
        let lexicon = Lexicon::load(Path::new(&config.lexicon_path))?;
        let synonyms = SynonymTable::with_overrides(&config.custom_synonyms);
        let assets = AssetStore::new(&config.assets_dir, config.asset_extension.as_str());
        let resolver = SignResolver::new(Arc::new(lexicon), Arc::new(synonyms), assets);

        let glosser = if config.llm_enabled {
            GlossGenerator::new(Arc::new(ChatClient::new(config)))
        } else {
            info!("Language model disabled, using local gloss only");
            GlossGenerator::offline()
        };

        let translator = Self::new(resolver, glosser);
        match HistoryStore::open(Path::new(&config.history_db_path), config.history_limit) {
            Ok(store) => Ok(translator.with_history(Arc::new(store))),
            Err(e) => {
                warn!("⚠️ History unavailable, continuing without it: {}", e);
                Ok(translator)
            }
        }
    }

    pub fn resolver(&self) -> &SignResolver {
        &self.resolver
    }

    pub fn glosser(&self) -> &GlossGenerator {
        &self.glosser
    }

    pub fn history(&self) -> Option<&Arc<HistoryStore>> {
        self.history.as_ref()
    }

    pub async fn translate(&self, text: &str, language: Language) -> SignResult<Translation> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SignError::EmptyInput);
        }

        let classification = classify(text);
        debug!("Classified '{}' as {:?}", text, classification);

        let gloss = self.gloss_for(text, &classification, language).await;
        let signs = self
            .translate_gloss(&gloss)
            .with_formula(classification.formula_tag(text));
        info!("🤟 '{}' -> {}", text, signs.display());

        self.record(&HistoryEntry::new(
            text,
            language,
            gloss.join(" "),
            signs.display(),
        ));

        Ok(Translation {
            input: text.to_string(),
            language,
            gloss,
            classification,
            signs,
        })
    }

    /// Render gloss already in hand
    pub fn translate_gloss(&self, gloss: &[String]) -> SignSequence {
        SignSequence::from_resolved(&self.resolver.resolve(gloss))
    }

    /// Gloss free text through the generator, normalizing symbols first
    pub async fn gloss_text(&self, text: &str, language: Language) -> Vec<String> {
        self.glosser.generate(&normalize(text), language).await
    }

    /// Gloss prose as written; symbols are left to the generator
    pub async fn gloss_prose(&self, text: &str, language: Language) -> Vec<String> {
        self.glosser.generate(text, language).await
    }

    /// Append to history; failures are logged only
    pub fn record(&self, entry: &HistoryEntry) {
        if let Some(history) = &self.history {
            if let Err(e) = history.append(entry) {
                warn!("⚠️ Failed to record history for '{}': {}", entry.input, e);
            }
        }
    }

    async fn gloss_for(
        &self,
        text: &str,
        classification: &Classification,
        language: Language,
    ) -> Vec<String> {
        match classification {
            Classification::ChemicalFormula { key } => {
                expansion_tokens(chemical_expansion(key)).unwrap_or_else(|| tokens(text))
            }
            Classification::PhysicsFormula { key, .. } => {
                expansion_tokens(physics_expansion(key)).unwrap_or_else(|| tokens(text))
            }
            c if c.bypasses_llm() => tokens(text),
            _ => self.gloss_text(text, language).await,
        }
    }
}

fn expansion_tokens(expansion: Option<&str>) -> Option<Vec<String>> {
    expansion.map(|e| e.split_whitespace().map(str::to_string).collect())
}
