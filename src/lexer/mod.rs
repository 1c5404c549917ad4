//! Lexical analysis for the front end.
//!
//! This module contains the lexer that converts a byte buffer into a lazy
//! stream of located symbols. It handles:
//!
//! - Single- and multi-character punctuation (one char of peek)
//! - Keyword vs. identifier classification via static table lookup
//! - Integer/float promotion on a single decimal point
//! - Raw string literals, with a diagnostic for unterminated ones
//! - Line/column tracking for error reporting

pub mod lexer;
pub mod tokens;
