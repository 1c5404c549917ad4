use crate::ast::ast::{
    BlockStmt, DeclStmt, ExprStmt, Field, FuncDecl, FuncType, RetStmt, Stmt, StoreDecl, ValueSpec,
};
use crate::ast::object::{DeclRef, ObjKind};
use crate::errors::errors::DiagnosticKind;
use crate::lexer::tokens::SymbolKind;

use super::expr::parse_expr;
use super::lookups::Precedence;
use super::parser::{Abort, Parser};

/// A top-level `var`/`const` declaration. Entered with `cur` on the keyword.
pub fn parse_store_decl(parser: &mut Parser, index: usize) -> Result<StoreDecl, Abort> {
    let keyword = parser.cur.clone();
    let site = DeclRef::Spec {
        decl: index,
        spec: 0,
    };
    let spec = parse_value_spec(parser, site)?;
    Ok(StoreDecl {
        keyword,
        specs: vec![spec],
    })
}

/// One `name [: type]` list with an optional `= value` list. Entered with
/// `cur` on the declaration keyword.
///
/// Every declared name is bound to a fresh object immediately. List length
/// mismatches are queued as diagnostics but still yield a spec, so a single
/// bad declaration does not cost the rest of the file its parse.
fn parse_value_spec(parser: &mut Parser, decl_ref: DeclRef) -> Result<ValueSpec, Abort> {
    let mut types = vec![];
    let names = parser.comma_list(|p| {
        let mut name = p.expect_ident()?;
        p.declare(&mut name, ObjKind::Var, decl_ref);
        if p.accept(SymbolKind::Colon) {
            types.push(p.expect_ident()?);
        }
        Ok(name)
    })?;

    let values = if parser.accept(SymbolKind::Assign) {
        parser.comma_list(|p| {
            p.next();
            parse_expr(p, Precedence::Lowest)
        })?
    } else {
        vec![]
    };

    let spec = ValueSpec {
        names,
        types,
        values,
    };
    if spec.types.len() > 1 && spec.types.len() != spec.names.len() {
        parser
            .handler
            .error_at(DiagnosticKind::TypeCountMismatch, spec.pos().clone());
    }
    if !spec.values.is_empty() && spec.values.len() != spec.names.len() {
        parser
            .handler
            .error_at(DiagnosticKind::ValueCountMismatch, spec.pos().clone());
    }
    Ok(spec)
}

/// A function declaration. Entered with `cur` on `fn`; leaves `cur` on the
/// closing brace of the body.
pub fn parse_fn_decl(parser: &mut Parser, index: usize) -> Result<FuncDecl, Abort> {
    let fn_pos = parser.cur.loc.clone();
    let mut name = parser.expect_ident()?;
    parser.declare(&mut name, ObjKind::Func, DeclRef::Func { decl: index });

    parser.expect(SymbolKind::LParen)?;
    let mut params = vec![];
    if !parser.accept(SymbolKind::RParen) {
        params = parser.comma_list(|p| {
            let mut param = p.expect_ident()?;
            p.declare(&mut param, ObjKind::Var, DeclRef::Param { decl: index });
            p.expect(SymbolKind::Colon)?;
            let ty = p.expect_ident()?;
            Ok(Field {
                name: Some(param),
                ty,
            })
        })?;
        parser.expect(SymbolKind::RParen)?;
    }

    // Result types are an unnamed list behind `->`.
    let mut results = vec![];
    if parser.accept(SymbolKind::Arrow) {
        results = parser.comma_list(|p| {
            Ok(Field {
                name: None,
                ty: p.expect_ident()?,
            })
        })?;
    }

    parser.expect(SymbolKind::LBrace)?;
    let body = parse_block(parser)?;

    Ok(FuncDecl {
        fn_pos,
        name,
        ty: FuncType { params, results },
        body,
    })
}

/// A brace-delimited statement list. Entered with `cur` on `{`; leaves `cur`
/// on the matching `}`.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Abort> {
    let lbrace = parser.cur.loc.clone();
    parser.next();

    let mut stmts = vec![];
    while parser.cur.kind != SymbolKind::RBrace && parser.cur.kind != SymbolKind::Eof {
        stmts.push(parse_stmt(parser)?);
        parser.next();
    }

    if parser.cur.kind != SymbolKind::RBrace {
        parser.handler.error_at(
            DiagnosticKind::UnexpectedSymbol {
                expected: SymbolKind::RBrace,
                got: parser.cur.lit.clone(),
                got_kind: parser.cur.kind,
            },
            parser.cur.loc.clone(),
        );
        return Err(Abort);
    }

    Ok(BlockStmt {
        lbrace,
        stmts,
        rbrace: parser.cur.loc.clone(),
    })
}

/// A single statement inside a block. Entered with `cur` on its first
/// symbol; leaves `cur` on its last.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Abort> {
    match parser.cur.kind {
        SymbolKind::Var | SymbolKind::Const => {
            let keyword = parser.cur.clone();
            let spec = parse_value_spec(parser, DeclRef::LocalSpec)?;
            Ok(Stmt::Decl(DeclStmt {
                keyword,
                specs: vec![spec],
            }))
        }
        SymbolKind::Ret => {
            let ret_pos = parser.cur.loc.clone();
            parser.next();
            let value = parse_expr(parser, Precedence::Lowest)?;
            Ok(Stmt::Ret(RetStmt { ret_pos, value }))
        }
        _ => Ok(Stmt::Expr(ExprStmt {
            x: parse_expr(parser, Precedence::Lowest)?,
        })),
    }
}
