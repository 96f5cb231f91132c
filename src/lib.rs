//! SignBridge Library
//!
//! English and STEM text to sign language gloss and verified animation
//! identifiers.

pub mod audit;
pub mod config;
pub mod core;
pub mod error;
pub mod history;
pub mod learn;
pub mod lexicon;
pub mod tables;
pub mod tutor;
pub mod utils;
