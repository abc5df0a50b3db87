//! Merge engine
//!
//! - [`json`]: deep merge of JSON trees, destination wins collisions
//! - [`lang`]: `.lang` merge by key, source wins collisions
//! - [`combine`]: folds one addon into another section by section

pub mod combine;
pub mod json;
pub mod lang;

pub use combine::{CombineResult, SectionStats, combine, combine_with_progress, merge_section};
pub use json::{canonical_json, deep_merge, merge_arrays_unique};
pub use lang::{LangFile, merge_lang};
