use std::mem;

use crate::ast::ast::{BlockStmt, Decl, Expr, File, FuncDecl, Ident, Stmt, ValueSpec};
use crate::ast::object::Objects;
use crate::ast::scope::Scope;
use crate::ast::universe::Universe;
use crate::errors::errors::{DiagnosticKind, ErrorHandler};

/// Binds every identifier in expression position to the object it names.
///
/// Top-level declarations are visible to the whole file regardless of order,
/// so the file scope is populated before any initializer or body is walked.
/// Binding is idempotent: identifiers already carrying an object (declared
/// names, or a prior resolution pass) are left untouched.
///
/// Returns the identifiers that resolved nowhere, in visit order; each has
/// also been queued on the handler as an error.
pub fn resolve(
    file: &mut File,
    objects: &Objects,
    universe: &Universe,
    handler: &ErrorHandler,
) -> Vec<Ident> {
    let mut resolver = Resolver {
        objects,
        universe,
        handler,
        scope: Scope::new(),
        unresolved: vec![],
    };
    resolver.file(file);
    resolver.unresolved
}

struct Resolver<'a> {
    objects: &'a Objects,
    universe: &'a Universe,
    handler: &'a ErrorHandler,
    scope: Scope,
    unresolved: Vec<Ident>,
}

impl Resolver<'_> {
    fn file(&mut self, file: &mut File) {
        for decl in &file.decls {
            match decl {
                Decl::Store(store) => {
                    for spec in &store.specs {
                        for name in &spec.names {
                            self.insert(name);
                        }
                    }
                }
                Decl::Func(func) => self.insert(&func.name),
            }
        }

        for decl in &mut file.decls {
            match decl {
                Decl::Store(store) => {
                    for spec in &mut store.specs {
                        self.spec_uses(spec);
                    }
                }
                Decl::Func(func) => self.func(func),
            }
        }
    }

    /// Resolves the use-sites of a spec: type annotations and initializers.
    /// The declared names themselves are already bound.
    fn spec_uses(&mut self, spec: &mut ValueSpec) {
        for ty in &mut spec.types {
            self.ident(ty);
        }
        for value in &mut spec.values {
            self.expr(value);
        }
    }

    fn func(&mut self, func: &mut FuncDecl) {
        for param in &mut func.ty.params {
            self.ident(&mut param.ty);
        }
        for result in &mut func.ty.results {
            self.ident(&mut result.ty);
        }

        self.push_scope();
        for param in &func.ty.params {
            if let Some(name) = &param.name {
                self.insert(name);
            }
        }
        self.block(&mut func.body);
        self.pop_scope();
    }

    fn block(&mut self, block: &mut BlockStmt) {
        for stmt in &mut block.stmts {
            self.stmt(stmt);
        }
    }

    fn stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Decl(decl) => {
                // Initializers see the enclosing binding, so `var x = x`
                // refers to the outer `x`, not the one being declared.
                for spec in &mut decl.specs {
                    self.spec_uses(spec);
                }
                for spec in &decl.specs {
                    for name in &spec.names {
                        self.insert(name);
                    }
                }
            }
            Stmt::Ret(ret) => self.expr(&mut ret.value),
            Stmt::Expr(expr) => self.expr(&mut expr.x),
        }
    }

    fn expr(&mut self, expr: &mut Expr) {
        match expr {
            Expr::Ident(ident) => self.ident(ident),
            Expr::Lit(_) => {}
            Expr::Assign(assign) => {
                for lhs in &mut assign.lhs {
                    self.expr(lhs);
                }
                for rhs in &mut assign.rhs {
                    self.expr(rhs);
                }
            }
            Expr::Binary(binary) => {
                self.expr(&mut binary.left);
                self.expr(&mut binary.right);
            }
        }
    }

    fn ident(&mut self, ident: &mut Ident) {
        if ident.obj.is_some() {
            return;
        }
        match self
            .scope
            .lookup(&ident.name)
            .or_else(|| self.universe.lookup(&ident.name))
        {
            Some(id) => ident.obj = Some(id),
            None => {
                self.handler.error_at(
                    DiagnosticKind::UnresolvedIdent {
                        name: ident.name.clone(),
                    },
                    ident.pos.clone(),
                );
                self.unresolved.push(ident.clone());
            }
        }
    }

    /// Makes a declared (already bound) name visible in the current scope.
    fn insert(&mut self, name: &Ident) {
        if let Some(id) = name.obj {
            debug_assert_eq!(self.objects.get(id).name, name.name);
            self.scope.insert(&name.name, id);
        }
    }

    fn push_scope(&mut self) {
        let parent = mem::take(&mut self.scope);
        self.scope = Scope::nested(parent);
    }

    fn pop_scope(&mut self) {
        self.scope = mem::take(&mut self.scope).into_parent().unwrap_or_default();
    }
}
