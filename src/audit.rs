//! Vocabulary Audit
//!
//! Cross-checks every table that names a sign against the asset store, so
//! drift between the tables, the lexicon manifest and the files on disk
//! shows up before a student sees an unexpected fingerspelling.

use crate::error::SignResult;
use crate::learn::SIGN_CATEGORIES;
use crate::lexicon::{AssetStore, Lexicon};
use crate::tables::formulas::{CHEM_FORMULAS, PHYSICS_FORMULAS};
use crate::tables::SynonymTable;
use crate::utils::fuzzy::find_best_match;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Minimum similarity for a "did you mean" asset suggestion
const SUGGESTION_CUTOFF: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSource {
    Synonym,
    ChemicalFormula,
    PhysicsFormula,
    Category,
    Lexicon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleEntry {
    pub source: AuditSource,
    /// Table entry the word came from, e.g. `HI -> HELLO`
    pub entry: String,
    pub word: String,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub checked: usize,
    pub asset_count: usize,
    pub lexicon_count: usize,
    pub stale: Vec<StaleEntry>,
    /// Assets on disk the lexicon does not list
    pub unlisted_assets: Vec<String>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty() && self.unlisted_assets.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "checked {} words against {} assets ({} in lexicon): {} stale, {} unlisted",
            self.checked,
            self.asset_count,
            self.lexicon_count,
            self.stale.len(),
            self.unlisted_assets.len()
        )
    }

    /// Append a timestamped report to `path`
    pub fn write_log(&self, path: &Path) -> SignResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        writeln!(
            file,
            "[{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.summary()
        )?;
        for stale in &self.stale {
            match &stale.suggestion {
                Some(s) => writeln!(
                    file,
                    "  STALE {:?} {} ('{}', nearest asset '{}')",
                    stale.source, stale.entry, stale.word, s
                )?,
                None => writeln!(
                    file,
                    "  STALE {:?} {} ('{}')",
                    stale.source, stale.entry, stale.word
                )?,
            }
        }
        for asset in &self.unlisted_assets {
            writeln!(file, "  UNLISTED {}", asset)?;
        }
        Ok(())
    }
}

/// Default audit log location
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("signbridge")
        .join("audit.log")
}

struct Auditor<'a> {
    lexicon: &'a Lexicon,
    assets: &'a AssetStore,
    asset_names: Vec<String>,
    asset_set: BTreeSet<String>,
    report: AuditReport,
}

impl<'a> Auditor<'a> {
    /// Whether the resolver could emit `word` as a whole sign
    fn signable(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        let letter = lower.chars().count() == 1;
        self.asset_set.contains(&lower) && (letter || self.lexicon.contains(&lower))
    }

    fn check(&mut self, source: AuditSource, entry: &str, word: &str) {
        self.report.checked += 1;
        if self.signable(word) {
            return;
        }
        let suggestion =
            find_best_match(word, &self.asset_names, SUGGESTION_CUTOFF).map(|m| m.value);
        self.report.stale.push(StaleEntry {
            source,
            entry: entry.to_string(),
            word: word.to_lowercase(),
            suggestion,
        });
    }
}

/// Audit synonyms, formula expansions, categories and the lexicon
pub fn run(lexicon: &Lexicon, synonyms: &SynonymTable, assets: &AssetStore) -> AuditReport {
    let asset_set = assets.list();
    let mut auditor = Auditor {
        lexicon,
        assets,
        asset_names: asset_set.iter().cloned().collect(),
        asset_set,
        report: AuditReport {
            lexicon_count: lexicon.len(),
            ..AuditReport::default()
        },
    };
    auditor.report.asset_count = auditor.asset_set.len();

    for (surface, target) in synonyms.entries() {
        let entry = format!("{surface} -> {target}");
        for word in target.split_whitespace() {
            auditor.check(AuditSource::Synonym, &entry, word);
        }
    }

    for (source, table) in [
        (AuditSource::ChemicalFormula, CHEM_FORMULAS),
        (AuditSource::PhysicsFormula, PHYSICS_FORMULAS),
    ] {
        let mut seen = BTreeSet::new();
        for (key, expansion) in table {
            for word in expansion.split_whitespace() {
                if seen.insert(word) {
                    auditor.check(source, key, word);
                }
            }
        }
    }

    for category in SIGN_CATEGORIES {
        for word in category.words {
            auditor.check(AuditSource::Category, category.name, word);
        }
    }

    for word in lexicon.sorted() {
        auditor.report.checked += 1;
        if !auditor.assets.exists(&word) {
            let suggestion =
                find_best_match(&word, &auditor.asset_names, SUGGESTION_CUTOFF).map(|m| m.value);
            auditor.report.stale.push(StaleEntry {
                source: AuditSource::Lexicon,
                entry: word.clone(),
                word,
                suggestion,
            });
        }
    }

    auditor.report.unlisted_assets = auditor
        .asset_names
        .iter()
        .filter(|a| !lexicon.contains(a) && a.chars().count() > 1)
        .cloned()
        .collect();

    let report = auditor.report;
    if report.is_clean() {
        info!("✅ Vocabulary audit clean: {}", report.summary());
    } else {
        warn!("⚠️ Vocabulary audit: {}", report.summary());
    }
    report
}
