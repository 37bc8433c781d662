//! Core logic for the uplift service.
//!
//! This crate is deliberately free of async and HTTP concerns. It holds:
//! - the curated fallback quote bank and its keyword classifier (`fallback`)
//! - post-processing and acceptability checks for generated text (`sanitize`)
//! - layered configuration loading and validation (`config`)
//! - the request-facing error taxonomy (`errors`)
//!
//! # Design principle
//!
//! The fallback bank is infallible: for any mood string it produces a
//! non-empty quote from a fixed, read-only table. Everything that can fail
//! (configuration, the outbound provider call) lives elsewhere and degrades
//! into the bank rather than into an error the caller has to handle.

pub mod config;
pub mod errors;
pub mod fallback;
pub mod sanitize;

pub use errors::{QuoteError, TransientKind};
pub use fallback::{classify, select_fallback, select_fallback_with, MoodCategory};
