//! Sign Vocabulary
//!
//! The lexicon is the manifest of words that have animation assets, and the
//! asset store answers whether a given identifier really has a file on disk.
//! The manifest is a hint; the asset store is the ground truth.

use crate::error::{SignError, SignResult};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Default animation file extension
pub const DEFAULT_ASSET_EXTENSION: &str = "sigml";

/// Set of lowercase words known to have animations
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load a newline-delimited manifest
    pub fn load(path: &Path) -> SignResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SignError::Lexicon(format!("cannot read manifest {}: {}", path.display(), e))
        })?;
        let lexicon = Self::from_words(content.lines());
        info!(
            "📚 Loaded {} sign vocabulary words from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Case-insensitive membership
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    /// Sorted copy of the vocabulary
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}

/// Directory of `<identifier>.<ext>` animation files
#[derive(Debug, Clone)]
pub struct AssetStore {
    dir: PathBuf,
    extension: String,
}

impl AssetStore {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        let extension: String = extension.into();
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path an identifier's animation would live at
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, self.extension))
    }

    /// True iff the animation file exists
    pub fn exists(&self, id: &str) -> bool {
        if id.is_empty() || id.contains(['/', '\\']) {
            return false;
        }
        let found = self.path_for(id).is_file();
        if !found {
            debug!("No asset for '{}'", id);
        }
        found
    }

    /// Identifiers of every asset present on disk
    pub fn list(&self) -> BTreeSet<String> {
        let suffix = format!(".{}", self.extension.to_lowercase());
        WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let name = e.file_name().to_str()?.to_lowercase();
                name.strip_suffix(&suffix).map(str::to_string)
            })
            .collect()
    }
}
