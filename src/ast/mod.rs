//! Tree (AST) module.
//!
//! Contains the shared data model that parsing, resolution and type checking
//! all operate on:
//!
//! - ast: the closed set of declaration/statement/expression node types
//! - object: binding records and the per-file object arena
//! - scope: lexically nested name→object maps
//! - universe: the process-wide scope of predeclared primitive types
//! - pretty: the numbered structural dump of a tree

pub mod ast;
pub mod object;
pub mod pretty;
pub mod scope;
pub mod universe;
