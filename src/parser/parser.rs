//! Parser state and the file-level entry point.
//!
//! The parser keeps a one-symbol lookahead over the lexer: `cur` is the
//! symbol being parsed and `peek` the one after it. Every production is
//! entered with `cur` on its first symbol and leaves `cur` on its last, so
//! callers decide when to step past it.

use std::mem;

use crate::ast::ast::{Decl, File, Ident};
use crate::ast::object::{DeclRef, ObjKind, Object, ObjectId, Objects};
use crate::errors::errors::{DiagnosticKind, ErrorHandler};
use crate::lexer::lexer::Lexer;
use crate::lexer::tokens::{Symbol, SymbolKind};

use super::lookups::{
    create_symbol_lookups, InfixFn, InfixLookup, Precedence, PrecedenceLookup, PrefixFn,
    PrefixLookup,
};
use super::stmt::{parse_fn_decl, parse_store_decl};

/// Marker for unwinding out of a failed production. The diagnostic has
/// already been queued on the shared handler by the site that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abort;

pub struct Parser<'e> {
    lexer: Lexer<'e>,
    pub(super) handler: &'e ErrorHandler,
    pub(super) cur: Symbol,
    pub(super) peek: Symbol,
    pub(super) objects: Objects,
    prefix_lookup: PrefixLookup,
    infix_lookup: InfixLookup,
    precedence_lookup: PrecedenceLookup,
}

impl<'e> Parser<'e> {
    pub fn new(mut lexer: Lexer<'e>, handler: &'e ErrorHandler) -> Self {
        let cur = lexer.next_symbol();
        let peek = lexer.next_symbol();
        Parser {
            lexer,
            handler,
            cur,
            peek,
            objects: Objects::new(),
            prefix_lookup: PrefixLookup::new(),
            infix_lookup: InfixLookup::new(),
            precedence_lookup: PrecedenceLookup::new(),
        }
    }

    /// Steps the window forward by one symbol.
    pub(super) fn next(&mut self) {
        self.cur = mem::replace(&mut self.peek, self.lexer.next_symbol());
    }

    /// Tests the peek symbol against `kind`; advances onto it on a match,
    /// queues an `UnexpectedSymbol` diagnostic and aborts otherwise.
    pub(super) fn expect(&mut self, kind: SymbolKind) -> Result<(), Abort> {
        if self.peek.kind == kind {
            self.next();
            Ok(())
        } else {
            self.handler.error_at(
                DiagnosticKind::UnexpectedSymbol {
                    expected: kind,
                    got: self.peek.lit.clone(),
                    got_kind: self.peek.kind,
                },
                self.peek.loc.clone(),
            );
            Err(Abort)
        }
    }

    /// Like [`Parser::expect`] for an identifier, returning the unbound node.
    pub(super) fn expect_ident(&mut self) -> Result<Ident, Abort> {
        self.expect(SymbolKind::Ident)?;
        Ok(Ident {
            pos: self.cur.loc.clone(),
            name: self.cur.lit.clone(),
            obj: None,
        })
    }

    /// Advances past the peek symbol if it has the given kind.
    pub(super) fn accept(&mut self, kind: SymbolKind) -> bool {
        if self.peek.kind == kind {
            self.next();
            true
        } else {
            false
        }
    }

    /// Parses `item (, item)*`. The single list-parsing loop for the whole
    /// grammar; items look at `cur`/`peek` themselves, and any count
    /// invariant is the caller's to enforce afterwards.
    pub(super) fn comma_list<T, F>(&mut self, mut item: F) -> Result<Vec<T>, Abort>
    where
        F: FnMut(&mut Self) -> Result<T, Abort>,
    {
        let mut items = vec![item(self)?];
        while self.accept(SymbolKind::Comma) {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Allocates the object for a declared name and binds the name to it.
    /// This is the eager half of binding; use-sites wait for the resolver.
    pub(super) fn declare(&mut self, ident: &mut Ident, kind: ObjKind, decl: DeclRef) -> ObjectId {
        let id = self.objects.alloc(Object {
            kind,
            name: ident.name.clone(),
            decl: Some(decl),
        });
        ident.obj = Some(id);
        id
    }

    pub(super) fn infix(&mut self, kind: SymbolKind, precedence: Precedence, infix_fn: InfixFn) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    pub(super) fn prefix(&mut self, kind: SymbolKind, prefix_fn: PrefixFn) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    pub(super) fn prefix_fn(&self, kind: SymbolKind) -> Option<PrefixFn> {
        self.prefix_lookup.get(&kind).copied()
    }

    pub(super) fn infix_fn(&self, kind: SymbolKind) -> Option<InfixFn> {
        self.infix_lookup.get(&kind).copied()
    }

    pub(super) fn cur_precedence(&self) -> Precedence {
        self.precedence(self.cur.kind)
    }

    pub(super) fn peek_precedence(&self) -> Precedence {
        self.precedence(self.peek.kind)
    }

    fn precedence(&self, kind: SymbolKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Panic-mode recovery: skips ahead to the next symbol that can start a
    /// top-level declaration.
    fn synchronize(&mut self) {
        self.next();
        while !matches!(
            self.cur.kind,
            SymbolKind::Var | SymbolKind::Const | SymbolKind::Fn | SymbolKind::Eof
        ) {
            self.next();
        }
    }
}

/// Parses a whole compilation unit.
///
/// Parsing never terminates the process; failed declarations queue their
/// diagnostics, the parser resynchronizes at the next declaration keyword,
/// and the partial tree is returned alongside the object arena. The caller
/// consults the shared handler before trusting the tree.
pub fn parse_file<'e>(lexer: Lexer<'e>, handler: &'e ErrorHandler) -> (File, Objects) {
    let mut parser = Parser::new(lexer, handler);
    create_symbol_lookups(&mut parser);

    let mut decls = vec![];
    while parser.cur.kind != SymbolKind::Eof {
        let index = decls.len();
        let result = match parser.cur.kind {
            SymbolKind::Var | SymbolKind::Const => {
                parse_store_decl(&mut parser, index).map(Decl::Store)
            }
            SymbolKind::Fn => parse_fn_decl(&mut parser, index).map(Decl::Func),
            _ => {
                parser
                    .handler
                    .error_at(DiagnosticKind::UnexpectedDecl, parser.cur.loc.clone());
                Err(Abort)
            }
        };
        match result {
            Ok(decl) => {
                decls.push(decl);
                parser.next();
            }
            Err(Abort) => parser.synchronize(),
        }
    }

    (File { decls }, parser.objects)
}
