use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Location;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, SymbolKind> = {
        let mut map = HashMap::new();
        map.insert("const", SymbolKind::Const);
        map.insert("var", SymbolKind::Var);
        map.insert("fn", SymbolKind::Fn);
        map.insert("ret", SymbolKind::Ret);
        map
    };
}

/// Classifies a scanned identifier as a keyword or a plain identifier.
pub fn lookup_ident(ident: &str) -> SymbolKind {
    match RESERVED_LOOKUP.get(ident) {
        Some(kind) => *kind,
        None => SymbolKind::Ident,
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SymbolKind {
    Eof,
    Illegal,

    // Identifiers + literals
    Ident,
    Int,
    Float,
    Str,

    // Operators
    Assign, // =
    Eq,     // ==
    Plus,
    Minus,
    Star,
    Slash,
    Lt,
    Gt,

    // Delimiters
    Arrow, // ->
    Colon,
    Comma,
    LBrace,
    RBrace,
    LParen,
    RParen,

    // Keywords
    Const,
    Var,
    Fn,
    Ret,
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SymbolKind::Eof => "end of file",
            SymbolKind::Illegal => "illegal",
            SymbolKind::Ident => "identifier",
            SymbolKind::Int => "integer",
            SymbolKind::Float => "float",
            SymbolKind::Str => "string",
            SymbolKind::Assign => "=",
            SymbolKind::Eq => "==",
            SymbolKind::Plus => "+",
            SymbolKind::Minus => "-",
            SymbolKind::Star => "*",
            SymbolKind::Slash => "/",
            SymbolKind::Lt => "<",
            SymbolKind::Gt => ">",
            SymbolKind::Arrow => "->",
            SymbolKind::Colon => ":",
            SymbolKind::Comma => ",",
            SymbolKind::LBrace => "{",
            SymbolKind::RBrace => "}",
            SymbolKind::LParen => "(",
            SymbolKind::RParen => ")",
            SymbolKind::Const => "const",
            SymbolKind::Var => "var",
            SymbolKind::Fn => "fn",
            SymbolKind::Ret => "ret",
        };
        write!(f, "{}", s)
    }
}

/// A classified, located lexeme. Symbols are transient: the parser consumes
/// them as they are produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub lit: String,
    pub loc: Location,
}

impl Symbol {
    pub fn new(kind: SymbolKind, lit: impl Into<String>, loc: Location) -> Self {
        Symbol {
            kind,
            lit: lit.into(),
            loc,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} {}", self.loc, self.kind, self.lit)
    }
}
