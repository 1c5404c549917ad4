//! Recursive-descent parser with a Pratt expression core.
//!
//! Declarations and statements are parsed by dedicated functions; expressions
//! go through prefix/infix handler tables keyed by symbol kind, with a
//! precedence map driving the Pratt loop. Declaration names are bound to
//! fresh objects as they are parsed; identifiers in expression position are
//! left for the resolver.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
