use pretty_assertions::assert_eq;

use crate::ast::ast::{Decl, Expr, File};
use crate::ast::object::Objects;
use crate::ast::universe::UNIVERSE;
use crate::errors::errors::{DiagnosticKind, ErrorHandler, Level};
use crate::lexer::lexer::Lexer;
use crate::parser::parser::parse_file;
use crate::resolver::resolver::resolve;

use super::type_checker::typecheck;

fn check(input: &str) -> (File, Objects, ErrorHandler) {
    let handler = ErrorHandler::new();
    let (mut file, objects) = {
        let lexer = Lexer::new("test.ibx", input.as_bytes().to_vec(), &handler);
        parse_file(lexer, &handler)
    };
    resolve(&mut file, &objects, &UNIVERSE, &handler);
    assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
    typecheck(&mut file, &objects, &handler);
    (file, objects, handler)
}

fn first_value(file: &File, i: usize) -> &Expr {
    match &file.decls[i] {
        Decl::Store(decl) => &decl.specs[0].values[0],
        other => panic!("expected a store declaration, got {:?}", other),
    }
}

#[test]
fn test_matching_kinds_pass() {
    let (_, _, handler) = check("var x: i32 = 1");
    assert!(handler.is_empty());
}

#[test]
fn test_integer_literal_widens_to_f64() {
    let (file, _, handler) = check("var x: f64 = 1");
    assert!(handler.is_empty());

    let Expr::Lit(lit) = first_value(&file, 0) else {
        panic!("expected a literal");
    };
    assert_eq!(lit.kind, "f64");
    assert_eq!(lit.value, "1");
}

#[test]
fn test_widening_rewrites_every_literal_in_the_value() {
    let (file, _, handler) = check("var x: i64 = 1 + 2 * 3");
    assert!(handler.is_empty());

    let Expr::Binary(sum) = first_value(&file, 0) else {
        panic!("expected a binary value");
    };
    let Expr::Lit(one) = sum.left.as_ref() else {
        panic!("expected a literal");
    };
    assert_eq!(one.kind, "i64");
    let Expr::Binary(product) = sum.right.as_ref() else {
        panic!("expected the product on the right");
    };
    let Expr::Lit(three) = product.right.as_ref() else {
        panic!("expected a literal");
    };
    assert_eq!(three.kind, "i64");
}

#[test]
fn test_narrowing_is_rejected() {
    let (_, _, handler) = check("var x: i32 = 1.5");
    let diagnostics = handler.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].level, Level::Error);
    assert_eq!(
        diagnostics[0].kind,
        DiagnosticKind::TypeMismatch {
            declared: String::from("i32"),
            value: String::from("f32"),
        }
    );
}

#[test]
fn test_non_numeric_mismatch_is_rejected() {
    let (_, _, handler) = check("var x: string = 1");
    assert_eq!(
        handler.diagnostics()[0].kind,
        DiagnosticKind::TypeMismatch {
            declared: String::from("string"),
            value: String::from("i32"),
        }
    );
}

#[test]
fn test_mismatch_does_not_stop_the_walk() {
    let (_, _, handler) = check("var x: i32 = \"s\" var y: string = 1.0");
    let names: Vec<_> = handler.diagnostics().iter().map(|d| d.kind.name()).collect();
    assert_eq!(names, vec!["TypeMismatch", "TypeMismatch"]);
}

#[test]
fn test_initializer_referencing_annotated_variable() {
    let (_, _, handler) = check("var x: i32 = 1 var y: i32 = x");
    assert!(handler.is_empty());
}

#[test]
fn test_annotated_variable_widens_into_wider_declaration() {
    let (_, _, handler) = check("var x: i32 = 1 var y: f64 = x");
    assert!(handler.is_empty());
}

#[test]
fn test_unannotated_names_are_skipped() {
    // Neither `x` nor the self-reference pins a kind down, so nothing is
    // reported.
    let (_, _, handler) = check("var x = 1 var y: i32 = x");
    assert!(handler.is_empty());
}

#[test]
fn test_checking_is_idempotent() {
    let handler = ErrorHandler::new();
    let (mut file, objects) = {
        let input = "var x: f64 = 1 + 2";
        let lexer = Lexer::new("test.ibx", input.as_bytes().to_vec(), &handler);
        parse_file(lexer, &handler)
    };
    resolve(&mut file, &objects, &UNIVERSE, &handler);

    let first = typecheck(&mut file, &objects, &handler);
    let snapshot = format!("{:?}", file);
    let second = typecheck(&mut file, &objects, &handler);

    // The second pass sees already-widened literals and changes nothing.
    assert!(handler.is_empty());
    assert_eq!(format!("{:?}", file), snapshot);
    assert_eq!(first, second);
}

#[test]
fn test_type_map_holds_declared_and_inferred_types() {
    let handler = ErrorHandler::new();
    let (mut file, objects) = {
        let input = "var x: i64 = 1 var y = 2.5 var z = 1";
        let lexer = Lexer::new("test.ibx", input.as_bytes().to_vec(), &handler);
        parse_file(lexer, &handler)
    };
    resolve(&mut file, &objects, &UNIVERSE, &handler);
    let type_map = typecheck(&mut file, &objects, &handler);

    assert!(handler.is_empty());
    assert_eq!(type_map.get("x"), UNIVERSE.lookup("i64").as_ref());
    assert_eq!(type_map.get("y"), UNIVERSE.lookup("f32").as_ref());
    assert_eq!(type_map.get("z"), UNIVERSE.lookup("i32").as_ref());
}
