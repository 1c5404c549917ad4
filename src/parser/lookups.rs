use std::collections::HashMap;

use crate::ast::ast::Expr;
use crate::lexer::tokens::SymbolKind;

use super::expr::*;
use super::parser::{Abort, Parser};

/// Operator precedence, lowest first. Derived ordering drives the Pratt
/// loop: parsing continues while the next operator binds tighter than the
/// level we entered with.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Assign,
    Equals,
    LessGreater,
    Sum,
    Product,
}

pub type PrefixFn = fn(&mut Parser) -> Result<Expr, Abort>;
pub type InfixFn = fn(&mut Parser, Expr) -> Result<Expr, Abort>;

pub type PrefixLookup = HashMap<SymbolKind, PrefixFn>;
pub type InfixLookup = HashMap<SymbolKind, InfixFn>;
pub type PrecedenceLookup = HashMap<SymbolKind, Precedence>;

pub fn create_symbol_lookups(parser: &mut Parser) {
    parser.infix(SymbolKind::Assign, Precedence::Assign, parse_assign_expr);

    parser.infix(SymbolKind::Eq, Precedence::Equals, parse_binary_expr);
    parser.infix(SymbolKind::Lt, Precedence::LessGreater, parse_binary_expr);
    parser.infix(SymbolKind::Gt, Precedence::LessGreater, parse_binary_expr);

    parser.infix(SymbolKind::Plus, Precedence::Sum, parse_binary_expr);
    parser.infix(SymbolKind::Minus, Precedence::Sum, parse_binary_expr);
    parser.infix(SymbolKind::Star, Precedence::Product, parse_binary_expr);
    parser.infix(SymbolKind::Slash, Precedence::Product, parse_binary_expr);

    parser.prefix(SymbolKind::Ident, parse_ident_expr);
    parser.prefix(SymbolKind::Int, parse_lit_expr);
    parser.prefix(SymbolKind::Float, parse_lit_expr);
    parser.prefix(SymbolKind::Str, parse_lit_expr);
}
