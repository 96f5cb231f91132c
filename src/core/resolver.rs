//! Sign Resolution
//!
//! Maps gloss tokens to animation identifiers. Every identifier emitted has
//! been checked against the asset store, whatever the lexicon or synonym
//! table claims.
//!
//! Per token, in order:
//! 1. Direct lexicon hit
//! 2. Synonym target
//! 3. Suffix-stripped root (direct or synonym)
//! 4. Letter-by-letter fingerspelling, skipping letters without an asset

use crate::lexicon::{AssetStore, Lexicon};
use crate::tables::SynonymTable;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Most specific first
const SUFFIXES: &[&str] = &["ING", "ED", "LY", "ES", "S"];

/// How a gloss token was turned into signs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "via", rename_all = "snake_case")]
pub enum Resolution {
    Direct { id: String },
    /// Targets may span several signs (`SQUARE` -> `POWER TWO`)
    Synonym { ids: Vec<String> },
    Stemmed { ids: Vec<String>, suffix: &'static str },
    /// Letters that had an asset, in order; may be empty
    Fingerspelled { letters: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedToken {
    pub token: String,
    pub resolution: Resolution,
}

impl ResolvedToken {
    /// Identifiers to play for this token
    pub fn ids(&self) -> Vec<&str> {
        match &self.resolution {
            Resolution::Direct { id } => vec![id.as_str()],
            Resolution::Synonym { ids }
            | Resolution::Stemmed { ids, .. }
            | Resolution::Fingerspelled { letters: ids } => {
                ids.iter().map(String::as_str).collect()
            }
        }
    }

    pub fn is_fingerspelled(&self) -> bool {
        matches!(self.resolution, Resolution::Fingerspelled { .. })
    }

    /// `WATER` for whole words, `W-A-T-E-R` for fingerspelling
    pub fn display(&self) -> String {
        let upper = self.token.to_uppercase();
        if self.is_fingerspelled() {
            upper
                .chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join("-")
        } else {
            upper
        }
    }
}

/// Asset existence checks, remembered for the duration of one call
struct AssetProbe<'a> {
    assets: &'a AssetStore,
    seen: HashMap<String, bool>,
}

impl<'a> AssetProbe<'a> {
    fn new(assets: &'a AssetStore) -> Self {
        Self {
            assets,
            seen: HashMap::new(),
        }
    }

    fn exists(&mut self, id: &str) -> bool {
        if let Some(&found) = self.seen.get(id) {
            return found;
        }
        let found = self.assets.exists(id);
        self.seen.insert(id.to_string(), found);
        found
    }
}

enum VocabHit {
    Direct(String),
    Synonym(Vec<String>),
}

impl VocabHit {
    fn into_ids(self) -> Vec<String> {
        match self {
            VocabHit::Direct(id) => vec![id],
            VocabHit::Synonym(ids) => ids,
        }
    }
}

/// Resolves gloss tokens against the lexicon, synonyms and asset store
#[derive(Debug, Clone)]
pub struct SignResolver {
    lexicon: Arc<Lexicon>,
    synonyms: Arc<SynonymTable>,
    assets: AssetStore,
}

impl SignResolver {
    pub fn new(lexicon: Arc<Lexicon>, synonyms: Arc<SynonymTable>, assets: AssetStore) -> Self {
        Self {
            lexicon,
            synonyms,
            assets,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub fn resolve(&self, tokens: &[String]) -> Vec<ResolvedToken> {
        let mut probe = AssetProbe::new(&self.assets);
        tokens
            .iter()
            .filter(|t| !t.trim().is_empty())
            .map(|t| self.resolve_token(t.trim(), &mut probe))
            .collect()
    }

    /// Flattened identifiers for `tokens`
    pub fn resolve_ids(&self, tokens: &[String]) -> Vec<String> {
        self.resolve(tokens)
            .iter()
            .flat_map(|r| r.ids().into_iter().map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    fn resolve_token(&self, token: &str, probe: &mut AssetProbe<'_>) -> ResolvedToken {
        let upper = token.to_uppercase();

        let resolution = match self.find_in_vocab(&upper, probe) {
            Some(VocabHit::Direct(id)) => Resolution::Direct { id },
            Some(VocabHit::Synonym(ids)) => Resolution::Synonym { ids },
            None => match self.strip_suffix(&upper, probe) {
                Some((ids, suffix)) => Resolution::Stemmed { ids, suffix },
                None => Resolution::Fingerspelled {
                    letters: self.fingerspell(&upper, probe),
                },
            },
        };
        debug!("'{}' -> {:?}", token, resolution);

        ResolvedToken {
            token: token.to_string(),
            resolution,
        }
    }

    fn find_in_vocab(&self, word: &str, probe: &mut AssetProbe<'_>) -> Option<VocabHit> {
        let lower = word.to_lowercase();
        if self.lexicon.contains(&lower) && probe.exists(&lower) {
            return Some(VocabHit::Direct(lower));
        }

        let target = self.synonyms.lookup(word)?;
        let ids: Vec<String> = target.split_whitespace().map(str::to_lowercase).collect();
        if ids
            .iter()
            .all(|id| self.lexicon.contains(id) && probe.exists(id))
        {
            return Some(VocabHit::Synonym(ids));
        }
        debug!("Synonym '{}' -> '{}' has no asset", word, target);
        None
    }

    fn strip_suffix(
        &self,
        word: &str,
        probe: &mut AssetProbe<'_>,
    ) -> Option<(Vec<String>, &'static str)> {
        for suffix in SUFFIXES {
            let Some(root) = word.strip_suffix(suffix) else {
                continue;
            };
            if root.chars().count() <= suffix.len() {
                continue;
            }
            for candidate in root_candidates(root, suffix) {
                if let Some(hit) = self.find_in_vocab(&candidate, probe) {
                    return Some((hit.into_ids(), suffix));
                }
            }
        }
        None
    }

    fn fingerspell(&self, word: &str, probe: &mut AssetProbe<'_>) -> Vec<String> {
        let mut letters = Vec::new();
        for letter in word.to_lowercase().chars().filter(|c| c.is_alphabetic()) {
            let id = letter.to_string();
            if probe.exists(&id) {
                letters.push(id);
            } else {
                warn!("⚠️ No sign asset for letter '{}' in '{}', skipping", letter, word);
            }
        }
        if letters.is_empty() {
            warn!("⚠️ Nothing signable in '{}'", word);
        }
        letters
    }
}

/// Roots to try after removing `suffix`: as-is, undoubled, with a restored E
fn root_candidates(root: &str, suffix: &str) -> Vec<String> {
    let mut candidates = vec![root.to_string()];
    if suffix == "ING" || suffix == "ED" {
        let chars: Vec<char> = root.chars().collect();
        if let [.., a, b] = chars.as_slice() {
            if a == b && !"AEIOU".contains(*b) && b.is_alphabetic() {
                candidates.push(chars[..chars.len() - 1].iter().collect());
            }
        }
        candidates.push(format!("{root}E"));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture(lexicon: &[&str], assets: &[&str], synonyms: &[(&str, &str)]) -> (TempDir, SignResolver) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        for id in assets {
            std::fs::write(dir.path().join(format!("{id}.sigml")), "<sigml/>").unwrap();
        }
        let resolver = SignResolver::new(
            Arc::new(Lexicon::from_words(lexicon)),
            Arc::new(SynonymTable::from_pairs(synonyms.iter().copied())),
            AssetStore::new(dir.path(), "sigml"),
        );
        (dir, resolver)
    }

    fn gloss(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_direct_and_synonym() {
        let (_dir, resolver) = fixture(&["hello", "teacher"], &["hello", "teacher"], &[("HI", "HELLO")]);
        assert_eq!(resolver.resolve_ids(&gloss("HI TEACHER")), vec!["hello", "teacher"]);
    }

    #[test]
    fn test_lexicon_word_without_asset_is_fingerspelled() {
        let (_dir, resolver) = fixture(&["cat"], &["c", "a", "t"], &[]);
        let resolved = resolver.resolve(&gloss("CAT"));
        assert!(resolved[0].is_fingerspelled());
        assert_eq!(resolver.resolve_ids(&gloss("CAT")), vec!["c", "a", "t"]);
    }

    #[test]
    fn test_stale_synonym_falls_through() {
        let (_dir, resolver) = fixture(&["hello"], &["h", "i"], &[("HI", "HELLO")]);
        assert_eq!(resolver.resolve_ids(&gloss("HI")), vec!["h", "i"]);
    }

    #[test]
    fn test_suffix_stripping() {
        let (_dir, resolver) = fixture(&["run", "make", "watch", "quick"], &["run", "make", "watch", "quick"], &[]);
        let resolved = resolver.resolve(&gloss("RUNNING MAKING WATCHES QUICKLY RUNS"));
        let ids: Vec<&str> = resolved.iter().flat_map(|r| r.ids()).collect();
        assert_eq!(ids, vec!["run", "make", "watch", "quick", "run"]);
        assert_eq!(
            resolved[0].resolution,
            Resolution::Stemmed {
                ids: vec!["run".to_string()],
                suffix: "ING"
            }
        );
    }

    #[test]
    fn test_multi_sign_synonym() {
        let (_dir, resolver) = fixture(&["power", "two"], &["power", "two"], &[("SQUARE", "POWER TWO")]);
        assert_eq!(resolver.resolve_ids(&gloss("SQUARE")), vec!["power", "two"]);
    }

    #[test]
    fn test_suffix_root_via_synonym() {
        let (_dir, resolver) = fixture(&["quick"], &["quick"], &[("FAST", "QUICK")]);
        assert_eq!(resolver.resolve_ids(&gloss("FASTS")), vec!["quick"]);
    }

    #[test]
    fn test_short_roots_not_stripped() {
        let (_dir, resolver) = fixture(&["b"], &["b", "e", "d"], &[]);
        // "B" + "ED": root no longer than the suffix
        assert_eq!(resolver.resolve_ids(&gloss("BED")), vec!["b", "e", "d"]);
    }

    #[test]
    fn test_partial_fingerspelling() {
        let (_dir, resolver) = fixture(&[], &["g", "l", "o", "r", "p"], &[]);
        let ids = resolver.resolve_ids(&gloss("GLORP2X"));
        assert_eq!(ids, vec!["g", "l", "o", "r", "p"]);
    }

    #[test]
    fn test_display() {
        let (_dir, resolver) = fixture(&["water"], &["water", "h", "o"], &[]);
        let resolved = resolver.resolve(&gloss("WATER H2O"));
        assert_eq!(resolved[0].display(), "WATER");
        assert_eq!(resolved[1].display(), "H-2-O");
    }
}
