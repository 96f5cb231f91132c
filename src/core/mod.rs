//! Core processing modules
//!
//! Symbolic normalization, formula recognition, gloss generation and sign
//! resolution, wired together by the translation pipeline.

pub mod gloss;
pub mod llm;
pub mod numbers;
pub mod pipeline;
pub mod recognizer;
pub mod resolver;
pub mod text_normalizer;

pub use gloss::{GlossGenerator, Language};
pub use pipeline::{SignSequence, Translation, Translator};
pub use recognizer::{classify, Classification};
pub use resolver::{Resolution, ResolvedToken, SignResolver};
