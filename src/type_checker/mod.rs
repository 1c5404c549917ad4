//! Declaration type checking over the resolved tree.
//!
//! The checked subset is the top-level `var`/`const` specs: each initializer
//! is compared against the declared type, numeric literals are widened to
//! the declared type where the ranking allows it, and anything else that
//! disagrees is reported. Function bodies are left to later pipeline stages.

pub mod type_checker;

#[cfg(test)]
mod tests;
