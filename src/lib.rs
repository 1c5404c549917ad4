#![allow(clippy::module_inception)]

//! Front end of the ibex experimental language: lexing, Pratt parsing,
//! scope-based name resolution and type checking over one shared tree.
//!
//! The pipeline is strictly staged: the parser pulls symbols from the lexer
//! on demand, the resolver and the type checker each make one traversal of
//! the parsed [`ast::ast::File`], and every stage reports into one shared
//! [`errors::errors::ErrorHandler`]. A stage's output is only trusted once
//! the handler gate passes.

use std::fmt::Display;
use std::rc::Rc;

pub mod ast;
pub mod errors;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod type_checker;

/// A line/column position in a named source file. Attached to every symbol
/// and every tree node; immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub filename: Rc<String>,
}

impl Location {
    pub fn new(line: u32, column: u32, filename: Rc<String>) -> Self {
        Location {
            line,
            column,
            filename,
        }
    }

    pub fn null() -> Self {
        Location::new(0, 0, Rc::new(String::from("<null>")))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::Location;
    use std::rc::Rc;

    #[test]
    fn test_location_display() {
        let loc = Location::new(3, 14, Rc::new(String::from("main.ibx")));
        assert_eq!(loc.to_string(), "main.ibx:3:14");
    }

    #[test]
    fn test_null_location() {
        let loc = Location::null();
        assert_eq!(loc.to_string(), "<null>:0:0");
    }
}
