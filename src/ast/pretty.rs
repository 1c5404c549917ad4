//! Numbered structural dump of a tree, one line per node field, indented by
//! nesting depth. Debug/inspection output only; the format is not a
//! stability contract.

use super::ast::{
    BasicLit, BlockStmt, Decl, Expr, Field, File, FuncDecl, Ident, Stmt, StoreDecl, ValueSpec,
};
use super::object::Objects;

pub fn dump(file: &File, objects: &Objects) -> String {
    let mut printer = Printer {
        out: String::new(),
        line: 0,
        objects,
    };
    printer.file(file);
    printer.out
}

fn label(i: Option<usize>, text: &str) -> String {
    match i {
        Some(i) => format!("{}: {}", i, text),
        None => String::from(text),
    }
}

struct Printer<'a> {
    out: String,
    line: usize,
    objects: &'a Objects,
}

impl Printer<'_> {
    fn push(&mut self, depth: usize, text: &str) {
        self.line += 1;
        self.out.push_str(&format!("{:4}  ", self.line));
        for _ in 0..depth {
            self.out.push_str(".  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn file(&mut self, file: &File) {
        self.push(0, "File {");
        self.push(1, &format!("decls: [Decl] (len = {}) [", file.decls.len()));
        for (i, decl) in file.decls.iter().enumerate() {
            self.decl(i, decl, 2);
        }
        self.push(1, "]");
        self.push(0, "}");
    }

    fn decl(&mut self, i: usize, decl: &Decl, depth: usize) {
        match decl {
            Decl::Store(store) => self.store_decl(i, store, depth),
            Decl::Func(func) => self.func_decl(i, func, depth),
        }
    }

    fn store_decl(&mut self, i: usize, decl: &StoreDecl, depth: usize) {
        self.push(depth, &format!("{}: StoreDecl {{", i));
        self.push(depth + 1, &format!("keyword: {}", decl.keyword.kind));
        self.specs(&decl.specs, depth + 1);
        self.push(depth, "}");
    }

    fn specs(&mut self, specs: &[ValueSpec], depth: usize) {
        self.push(
            depth,
            &format!("specs: [ValueSpec] (len = {}) [", specs.len()),
        );
        for (i, spec) in specs.iter().enumerate() {
            self.push(depth + 1, &format!("{}: ValueSpec {{", i));
            self.ident_list("names", &spec.names, depth + 2);
            self.ident_list("types", &spec.types, depth + 2);
            self.push(
                depth + 2,
                &format!("values: [Expr] (len = {}) [", spec.values.len()),
            );
            for (vi, value) in spec.values.iter().enumerate() {
                self.expr(Some(vi), value, depth + 3);
            }
            self.push(depth + 2, "]");
            self.push(depth + 1, "}");
        }
        self.push(depth, "]");
    }

    fn ident_list(&mut self, label: &str, idents: &[Ident], depth: usize) {
        self.push(
            depth,
            &format!("{}: [Ident] (len = {}) [", label, idents.len()),
        );
        for (i, ident) in idents.iter().enumerate() {
            self.ident(Some(i), ident, depth + 1);
        }
        self.push(depth, "]");
    }

    fn func_decl(&mut self, i: usize, decl: &FuncDecl, depth: usize) {
        self.push(depth, &format!("{}: FuncDecl {{", i));
        self.push(depth + 1, "name:");
        self.ident(None, &decl.name, depth + 2);
        self.fields("params", &decl.ty.params, depth + 1);
        self.fields("results", &decl.ty.results, depth + 1);
        self.block(&decl.body, depth + 1);
        self.push(depth, "}");
    }

    fn fields(&mut self, label: &str, fields: &[Field], depth: usize) {
        self.push(
            depth,
            &format!("{}: [Field] (len = {}) [", label, fields.len()),
        );
        for (i, field) in fields.iter().enumerate() {
            self.push(depth + 1, &format!("{}: Field {{", i));
            match &field.name {
                Some(name) => {
                    self.push(depth + 2, "name:");
                    self.ident(None, name, depth + 3);
                }
                None => self.push(depth + 2, "name: nil"),
            }
            self.push(depth + 2, "type:");
            self.ident(None, &field.ty, depth + 3);
            self.push(depth + 1, "}");
        }
        self.push(depth, "]");
    }

    fn block(&mut self, block: &BlockStmt, depth: usize) {
        self.push(depth, "body: BlockStmt {");
        self.push(depth + 1, &format!("lbrace: {}", block.lbrace));
        self.push(
            depth + 1,
            &format!("stmts: [Stmt] (len = {}) [", block.stmts.len()),
        );
        for (i, stmt) in block.stmts.iter().enumerate() {
            self.stmt(i, stmt, depth + 2);
        }
        self.push(depth + 1, "]");
        self.push(depth + 1, &format!("rbrace: {}", block.rbrace));
        self.push(depth, "}");
    }

    fn stmt(&mut self, i: usize, stmt: &Stmt, depth: usize) {
        match stmt {
            Stmt::Decl(decl) => {
                self.push(depth, &format!("{}: DeclStmt {{", i));
                self.push(depth + 1, &format!("keyword: {}", decl.keyword.kind));
                self.specs(&decl.specs, depth + 1);
                self.push(depth, "}");
            }
            Stmt::Ret(ret) => {
                self.push(depth, &format!("{}: RetStmt {{", i));
                self.push(depth + 1, &format!("ret_pos: {}", ret.ret_pos));
                self.push(depth + 1, "value:");
                self.expr(None, &ret.value, depth + 2);
                self.push(depth, "}");
            }
            Stmt::Expr(expr) => {
                self.push(depth, &format!("{}: ExprStmt {{", i));
                self.push(depth + 1, "x:");
                self.expr(None, &expr.x, depth + 2);
                self.push(depth, "}");
            }
        }
    }

    fn expr(&mut self, i: Option<usize>, expr: &Expr, depth: usize) {
        match expr {
            Expr::Ident(ident) => self.ident(i, ident, depth),
            Expr::Lit(lit) => self.lit(i, lit, depth),
            Expr::Assign(assign) => {
                self.push(depth, &label(i, "AssignExpr {"));
                self.push(
                    depth + 1,
                    &format!("lhs: [Expr] (len = {}) [", assign.lhs.len()),
                );
                for (li, lhs) in assign.lhs.iter().enumerate() {
                    self.expr(Some(li), lhs, depth + 2);
                }
                self.push(depth + 1, "]");
                self.push(depth + 1, &format!("op: {}", assign.op.kind));
                self.push(
                    depth + 1,
                    &format!("rhs: [Expr] (len = {}) [", assign.rhs.len()),
                );
                for (ri, rhs) in assign.rhs.iter().enumerate() {
                    self.expr(Some(ri), rhs, depth + 2);
                }
                self.push(depth + 1, "]");
                self.push(depth, "}");
            }
            Expr::Binary(binary) => {
                self.push(depth, &label(i, "BinaryExpr {"));
                self.push(depth + 1, "left:");
                self.expr(None, &binary.left, depth + 2);
                self.push(depth + 1, &format!("op: {}", binary.op.kind));
                self.push(depth + 1, "right:");
                self.expr(None, &binary.right, depth + 2);
                self.push(depth, "}");
            }
        }
    }

    fn ident(&mut self, i: Option<usize>, ident: &Ident, depth: usize) {
        self.push(depth, &label(i, "Ident {"));
        self.push(depth + 1, &format!("name_pos: {}", ident.pos));
        self.push(depth + 1, &format!("name: {:?}", ident.name));
        match ident.obj {
            Some(id) => {
                let object = self.objects.get(id);
                self.push(
                    depth + 1,
                    &format!(
                        "obj: {} Object {{ kind: {}, name: {:?} }}",
                        id, object.kind, object.name
                    ),
                );
            }
            None => self.push(depth + 1, "obj: nil"),
        }
        self.push(depth, "}");
    }

    fn lit(&mut self, i: Option<usize>, lit: &BasicLit, depth: usize) {
        self.push(depth, &label(i, "BasicLit {"));
        self.push(depth + 1, &format!("value_pos: {}", lit.pos));
        self.push(depth + 1, &format!("kind: {}", lit.kind));
        self.push(depth + 1, &format!("value: {:?}", lit.value));
        self.push(depth, "}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ast::{Decl, StoreDecl, ValueSpec};
    use crate::lexer::tokens::{Symbol, SymbolKind};
    use crate::Location;

    #[test]
    fn test_dump_numbers_and_indents_lines() {
        let loc = Location::null();
        let file = File {
            decls: vec![Decl::Store(StoreDecl {
                keyword: Symbol::new(SymbolKind::Var, "var", loc.clone()),
                specs: vec![ValueSpec {
                    names: vec![Ident {
                        pos: loc.clone(),
                        name: String::from("x"),
                        obj: None,
                    }],
                    types: vec![],
                    values: vec![Expr::Lit(BasicLit {
                        pos: loc,
                        kind: String::from("i32"),
                        value: String::from("1"),
                    })],
                }],
            })],
        };

        let out = dump(&file, &Objects::new());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "   1  File {");
        assert_eq!(lines[1], "   2  .  decls: [Decl] (len = 1) [");
        assert_eq!(lines[2], "   3  .  .  0: StoreDecl {");
        assert!(out.contains("keyword: var"));
        assert!(out.contains("name: \"x\""));
        assert!(out.contains("obj: nil"));
        assert!(out.contains("kind: i32"));
        let last = lines.last().unwrap();
        assert!(last.trim_start().starts_with(&lines.len().to_string()));
        assert!(last.ends_with('}'));
    }
}
