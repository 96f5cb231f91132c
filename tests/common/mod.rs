#![allow(dead_code)]

pub mod mock_llm;

use mock_llm::MockLlm;
use signbridge::config::Config;
use signbridge::core::{GlossGenerator, SignResolver, Translator};
use signbridge::lexicon::{AssetStore, Lexicon};
use signbridge::tables::SynonymTable;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Words listed in the fixture lexicon that also have an asset
pub const WORDS: &[&str] = &[
    "boy", "eat", "food", "run", "make", "force", "mass", "water", "two", "equal", "power",
    "happy", "red",
];

/// Listed in the lexicon but with no asset on disk
pub const MISSING_ASSETS: &[&str] = &["hello"];

pub struct TestContext {
    pub temp_dir: TempDir,
    pub lexicon: Arc<Lexicon>,
    pub assets: AssetStore,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let sign_dir = temp_dir.path().join("sigml");
        fs::create_dir_all(&sign_dir).expect("Failed to create asset dir");

        let letters = ('a'..='z').map(|c| c.to_string());
        for id in letters.chain(WORDS.iter().map(|w| w.to_string())) {
            fs::write(sign_dir.join(format!("{id}.sigml")), "<sigml></sigml>")
                .expect("Failed to write asset");
        }

        let listed: Vec<&str> = WORDS.iter().chain(MISSING_ASSETS).copied().collect();
        fs::write(temp_dir.path().join("words.txt"), listed.join("\n"))
            .expect("Failed to write lexicon");

        Self {
            lexicon: Arc::new(Lexicon::from_words(&listed)),
            assets: AssetStore::new(&sign_dir, "sigml"),
            temp_dir,
        }
    }

    pub fn resolver(&self) -> SignResolver {
        SignResolver::new(
            self.lexicon.clone(),
            Arc::new(SynonymTable::builtin()),
            self.assets.clone(),
        )
    }

    pub fn translator(&self, llm: Arc<MockLlm>) -> Translator {
        Translator::new(self.resolver(), GlossGenerator::new(llm))
    }

    pub fn offline_translator(&self) -> Translator {
        Translator::new(self.resolver(), GlossGenerator::offline())
    }

    /// Config pointing at the fixture, language model off
    pub fn config(&self) -> Config {
        let path = |name: &str| self.temp_dir.path().join(name).to_string_lossy().to_string();
        Config {
            lexicon_path: path("words.txt"),
            assets_dir: path("sigml"),
            history_db_path: path("history.db"),
            llm_enabled: false,
            ..Config::default()
        }
    }

    /// Every emitted identifier has a file on disk
    pub fn assert_sound(&self, ids: &[String]) {
        for id in ids {
            assert!(self.assets.exists(id), "emitted '{id}' without an asset");
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
