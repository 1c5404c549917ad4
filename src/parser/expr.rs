use crate::ast::ast::{AssignExpr, BasicLit, BinaryExpr, Expr, Ident};
use crate::errors::errors::DiagnosticKind;
use crate::lexer::tokens::SymbolKind;

use super::lookups::Precedence;
use super::parser::{Abort, Parser};

/// The Pratt loop. Parses the prefix form under `cur`, then keeps folding
/// infix operators in while the peeked one binds tighter than `precedence`.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expr, Abort> {
    let prefix = match parser.prefix_fn(parser.cur.kind) {
        Some(prefix) => prefix,
        None => {
            parser.handler.error_at(
                DiagnosticKind::NoPrefixParseFn {
                    kind: parser.cur.kind,
                },
                parser.cur.loc.clone(),
            );
            return Err(Abort);
        }
    };
    let mut left = prefix(parser)?;

    while precedence < parser.peek_precedence() {
        let infix = match parser.infix_fn(parser.peek.kind) {
            Some(infix) => infix,
            None => break,
        };
        parser.next();
        left = infix(parser, left)?;
    }

    Ok(left)
}

/// An identifier in expression position. Left unbound; the resolver fills
/// in the object edge.
pub fn parse_ident_expr(parser: &mut Parser) -> Result<Expr, Abort> {
    Ok(Expr::Ident(Ident {
        pos: parser.cur.loc.clone(),
        name: parser.cur.lit.clone(),
        obj: None,
    }))
}

/// A literal. The kind tag is decided by lexical form alone; the checker may
/// widen it later.
pub fn parse_lit_expr(parser: &mut Parser) -> Result<Expr, Abort> {
    let kind = match parser.cur.kind {
        SymbolKind::Int => "i32",
        SymbolKind::Float => "f32",
        _ => "string",
    };
    Ok(Expr::Lit(BasicLit {
        pos: parser.cur.loc.clone(),
        kind: String::from(kind),
        value: parser.cur.lit.clone(),
    }))
}

/// Entered with `cur` on the operator. Left-associative: the right operand
/// is parsed at the operator's own precedence.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Abort> {
    let op = parser.cur.clone();
    let precedence = parser.cur_precedence();
    parser.next();
    let right = parse_expr(parser, precedence)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }))
}

/// Entered with `cur` on `=`. Right-associative (`a = b = 1` nests to the
/// right), and the right-hand side may be a comma-separated list.
pub fn parse_assign_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Abort> {
    let op = parser.cur.clone();
    let rhs = parser.comma_list(|p| {
        p.next();
        parse_expr(p, Precedence::Lowest)
    })?;

    Ok(Expr::Assign(AssignExpr {
        lhs: vec![left],
        op_pos: op.loc.clone(),
        op,
        rhs,
    }))
}
