//! Plugin reference descriptors.
//!
//! - `types`: the descriptor and its configuration value model
//! - `parser`: reference parsing and pipeline JSON decoding
//! - `repository`: repository boundary resolution
//! - `naming`: name / label / identifier derivation
//! - `env`: configuration-to-environment encoding

pub mod env;
pub mod naming;
pub mod parser;
pub mod repository;
pub mod types;

pub use types::{ConfigValue, Configuration, Plugin};
