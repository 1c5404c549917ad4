//! Scope-based name resolution.
//!
//! Walks the tree once, threading a scope chain: the file scope holds every
//! top-level name up front, each function body gets a nested scope seeded
//! with its parameters, and the universe scope is the terminal fallback.
//! Identifiers in expression position are bound to their objects in place;
//! names that resolve nowhere are collected and reported.

pub mod resolver;

#[cfg(test)]
mod tests;
