use crate::lexer::tokens::Symbol;
use crate::Location;

use super::object::ObjectId;

/// The compilation unit; root of ownership for every declaration.
///
/// Nodes are created once by the parser and then mutated in place by the
/// later stages: the resolver fills in [`Ident::obj`] bindings and the type
/// checker rewrites literal kinds during coercion.
#[derive(Debug, Clone)]
pub struct File {
    pub decls: Vec<Decl>,
}

/// A top-level declaration.
#[derive(Debug, Clone)]
pub enum Decl {
    Store(StoreDecl),
    Func(FuncDecl),
}

impl Decl {
    pub fn pos(&self) -> &Location {
        match self {
            Decl::Store(decl) => &decl.keyword.loc,
            Decl::Func(decl) => &decl.fn_pos,
        }
    }
}

/// A `var`/`const` declaration at the top level. Carries one or more specs
/// to support grouped declarations.
#[derive(Debug, Clone)]
pub struct StoreDecl {
    pub keyword: Symbol,
    pub specs: Vec<ValueSpec>,
}

/// One declaration group.
///
/// Invariants, enforced by the declaration parser after list parsing:
/// `types.len() <= names.len()` and `values.len() == names.len()`.
#[derive(Debug, Clone)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    pub types: Vec<Ident>,
    pub values: Vec<Expr>,
}

impl ValueSpec {
    pub fn pos(&self) -> &Location {
        &self.names[0].pos
    }

    /// The type annotation governing `names[index]`, if any. A spec with one
    /// annotation for several names applies it to the whole group.
    pub fn type_for(&self, index: usize) -> Option<&Ident> {
        if self.types.len() == self.names.len() {
            self.types.get(index)
        } else if self.types.len() == 1 {
            self.types.first()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct FuncDecl {
    pub fn_pos: Location,
    pub name: Ident,
    pub ty: FuncType,
    pub body: BlockStmt,
}

/// A function signature. `Field::name` is present for parameters and absent
/// for result fields (results are unnamed).
#[derive(Debug, Clone)]
pub struct FuncType {
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: Option<Ident>,
    pub ty: Ident,
}

impl Field {
    pub fn pos(&self) -> &Location {
        match &self.name {
            Some(name) => &name.pos,
            None => &self.ty.pos,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub lbrace: Location,
    pub stmts: Vec<Stmt>,
    pub rbrace: Location,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Decl(DeclStmt),
    Ret(RetStmt),
    Expr(ExprStmt),
}

impl Stmt {
    pub fn pos(&self) -> &Location {
        match self {
            Stmt::Decl(stmt) => &stmt.keyword.loc,
            Stmt::Ret(stmt) => &stmt.ret_pos,
            Stmt::Expr(stmt) => stmt.x.pos(),
        }
    }
}

/// A `var`/`const` declaration inside a block.
#[derive(Debug, Clone)]
pub struct DeclStmt {
    pub keyword: Symbol,
    pub specs: Vec<ValueSpec>,
}

#[derive(Debug, Clone)]
pub struct RetStmt {
    pub ret_pos: Location,
    pub value: Expr,
}

#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub x: Expr,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Ident(Ident),
    Lit(BasicLit),
    Assign(AssignExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn pos(&self) -> &Location {
        match self {
            Expr::Ident(ident) => &ident.pos,
            Expr::Lit(lit) => &lit.pos,
            Expr::Assign(assign) => &assign.op_pos,
            Expr::Binary(binary) => binary.left.pos(),
        }
    }
}

/// A name occurrence.
///
/// `obj` is the binding edge from use-site to declaration-site. Declaration
/// names are bound eagerly at parse time; expression-position identifiers
/// start unbound and are filled in exactly once by the resolver.
#[derive(Debug, Clone)]
pub struct Ident {
    pub pos: Location,
    pub name: String,
    pub obj: Option<ObjectId>,
}

/// A literal. `kind` is a primitive type tag (`i32`, `f32`, `string`, …)
/// assigned at parse time from the lexical form; the type checker may
/// rewrite it during widening coercion.
#[derive(Debug, Clone)]
pub struct BasicLit {
    pub pos: Location,
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct AssignExpr {
    pub lhs: Vec<Expr>,
    pub op_pos: Location,
    pub op: Symbol,
    pub rhs: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: Symbol,
    pub right: Box<Expr>,
}
