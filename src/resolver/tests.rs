use pretty_assertions::assert_eq;

use crate::ast::ast::{Decl, Expr, File, FuncDecl, Ident, Stmt};
use crate::ast::object::{ObjKind, Objects};
use crate::ast::universe::UNIVERSE;
use crate::errors::errors::ErrorHandler;
use crate::lexer::lexer::Lexer;
use crate::parser::parser::parse_file;

use super::resolver::resolve;

fn analyze(input: &str) -> (File, Objects, Vec<Ident>, ErrorHandler) {
    let handler = ErrorHandler::new();
    let (mut file, objects) = {
        let lexer = Lexer::new("test.ibx", input.as_bytes().to_vec(), &handler);
        parse_file(lexer, &handler)
    };
    let unresolved = resolve(&mut file, &objects, &UNIVERSE, &handler);
    (file, objects, unresolved, handler)
}

fn func(file: &File, i: usize) -> FuncDecl {
    match &file.decls[i] {
        Decl::Func(decl) => decl.clone(),
        other => panic!("expected a function declaration, got {:?}", other),
    }
}

fn first_spec(file: &File, i: usize) -> crate::ast::ast::ValueSpec {
    match &file.decls[i] {
        Decl::Store(decl) => decl.specs[0].clone(),
        other => panic!("expected a store declaration, got {:?}", other),
    }
}

#[test]
fn test_type_annotations_bind_to_universe() {
    let (file, _, unresolved, handler) = analyze("var x: i32 = 1");
    assert!(handler.is_empty());
    assert!(unresolved.is_empty());

    let spec = first_spec(&file, 0);
    assert_eq!(spec.types[0].obj, UNIVERSE.lookup("i32"));
}

#[test]
fn test_body_idents_bind_to_params() {
    let (file, objects, unresolved, handler) =
        analyze("fn add(a: i32, b: i32) -> i32 { ret a + b }");
    assert!(handler.is_empty());
    assert!(unresolved.is_empty());

    let decl = func(&file, 0);
    let a_param = decl.ty.params[0].name.as_ref().unwrap().obj.unwrap();
    let b_param = decl.ty.params[1].name.as_ref().unwrap().obj.unwrap();

    let Stmt::Ret(ret) = &decl.body.stmts[0] else {
        panic!("expected a ret statement");
    };
    let Expr::Binary(sum) = &ret.value else {
        panic!("expected `a + b`");
    };
    let (Expr::Ident(a), Expr::Ident(b)) = (sum.left.as_ref(), sum.right.as_ref()) else {
        panic!("expected identifier operands");
    };
    assert_eq!(a.obj, Some(a_param));
    assert_eq!(b.obj, Some(b_param));
    assert_eq!(objects.get(a_param).kind, ObjKind::Var);

    // Parameter types and the result type come from the universe.
    assert_eq!(decl.ty.params[0].ty.obj, UNIVERSE.lookup("i32"));
    assert_eq!(decl.ty.results[0].ty.obj, UNIVERSE.lookup("i32"));
}

#[test]
fn test_top_level_names_are_visible_out_of_order() {
    let (file, _, unresolved, handler) = analyze("fn f() -> i32 { ret x } var x: i32 = 1");
    assert!(handler.is_empty());
    assert!(unresolved.is_empty());

    let global = first_spec(&file, 1).names[0].obj.unwrap();
    let decl = func(&file, 0);
    let Stmt::Ret(ret) = &decl.body.stmts[0] else {
        panic!("expected a ret statement");
    };
    let Expr::Ident(x) = &ret.value else {
        panic!("expected an identifier");
    };
    assert_eq!(x.obj, Some(global));
}

#[test]
fn test_unresolved_ident_is_reported_once() {
    let (_, _, unresolved, handler) = analyze("var x = y");
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0].name, "y");
    assert_eq!(handler.len(), 1);
    assert!(handler.has_errors());
}

#[test]
fn test_local_initializer_sees_the_outer_binding() {
    let (file, _, unresolved, handler) = analyze("var x: i32 = 1 fn f() { var x = x }");
    assert!(handler.is_empty());
    assert!(unresolved.is_empty());

    let global = first_spec(&file, 0).names[0].obj.unwrap();
    let decl = func(&file, 1);
    let Stmt::Decl(stmt) = &decl.body.stmts[0] else {
        panic!("expected a declaration statement");
    };
    let spec = &stmt.specs[0];
    let local = spec.names[0].obj.unwrap();
    let Expr::Ident(init) = &spec.values[0] else {
        panic!("expected an identifier initializer");
    };
    assert_eq!(init.obj, Some(global));
    assert_ne!(local, global);
}

#[test]
fn test_local_binding_shadows_global_afterwards() {
    let (file, _, unresolved, handler) = analyze("var x: i32 = 1 fn f() { var x = 2 x = 3 }");
    assert!(handler.is_empty());
    assert!(unresolved.is_empty());

    let decl = func(&file, 1);
    let Stmt::Decl(stmt) = &decl.body.stmts[0] else {
        panic!("expected a declaration statement");
    };
    let local = stmt.specs[0].names[0].obj.unwrap();
    let Stmt::Expr(stmt) = &decl.body.stmts[1] else {
        panic!("expected an expression statement");
    };
    let Expr::Assign(assign) = &stmt.x else {
        panic!("expected an assignment");
    };
    let Expr::Ident(target) = &assign.lhs[0] else {
        panic!("expected an identifier target");
    };
    assert_eq!(target.obj, Some(local));
}

#[test]
fn test_unknown_type_annotation_is_unresolved() {
    let (_, _, unresolved, handler) = analyze("var x: i9 = 1");
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0].name, "i9");
    assert!(handler.has_errors());
}

#[test]
fn test_resolution_is_idempotent() {
    let handler = ErrorHandler::new();
    let (mut file, objects) = {
        let input = "var x: i32 = 1 fn f() -> i32 { ret x }";
        let lexer = Lexer::new("test.ibx", input.as_bytes().to_vec(), &handler);
        parse_file(lexer, &handler)
    };

    let first = resolve(&mut file, &objects, &UNIVERSE, &handler);
    let snapshot = format!("{:?}", file);
    let second = resolve(&mut file, &objects, &UNIVERSE, &handler);

    assert!(first.is_empty());
    assert!(second.is_empty());
    assert!(handler.is_empty());
    assert_eq!(format!("{:?}", file), snapshot);
}
