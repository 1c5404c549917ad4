use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::ast::ast::{Decl, Expr, File, ValueSpec};
use crate::ast::object::{DeclRef, ObjKind, ObjectId, Objects};
use crate::ast::universe::UNIVERSE;
use crate::errors::errors::{DiagnosticKind, ErrorHandler};

lazy_static! {
    /// Numeric widening order. A value may be coerced to a declared type of
    /// strictly higher rank; anything else is a mismatch.
    static ref NUM_RANK: HashMap<&'static str, u8> = {
        let mut map = HashMap::new();
        map.insert("i32", 1);
        map.insert("i64", 2);
        map.insert("u32", 3);
        map.insert("u64", 4);
        map.insert("f32", 5);
        map.insert("f64", 6);
        map
    };
}

/// A pending literal rewrite, recorded during the read-only pass and applied
/// once the whole file has been examined.
struct Coercion {
    decl: usize,
    spec: usize,
    value: usize,
    kind: String,
}

/// Checks every top-level spec and returns the name to type-object map for
/// the names whose type is known, either declared or inferred from the
/// initializer.
///
/// Runs in two passes over the tree: the first collects mismatch diagnostics
/// and pending coercions without touching a node, the second rewrites the
/// literal kinds the coercions call for. A mismatch never stops the walk;
/// every spec in the file is examined.
pub fn typecheck(
    file: &mut File,
    objects: &Objects,
    handler: &ErrorHandler,
) -> HashMap<String, ObjectId> {
    let mut type_map = HashMap::new();
    let mut coercions = vec![];

    for (decl_index, decl) in file.decls.iter().enumerate() {
        let Decl::Store(store) = decl else {
            continue;
        };
        for (spec_index, spec) in store.specs.iter().enumerate() {
            check_spec(
                file,
                objects,
                handler,
                spec,
                decl_index,
                spec_index,
                &mut type_map,
                &mut coercions,
            );
        }
    }

    for coercion in coercions {
        let Decl::Store(store) = &mut file.decls[coercion.decl] else {
            continue;
        };
        let value = &mut store.specs[coercion.spec].values[coercion.value];
        widen_literals(value, &coercion.kind);
    }

    type_map
}

#[allow(clippy::too_many_arguments)]
fn check_spec(
    file: &File,
    objects: &Objects,
    handler: &ErrorHandler,
    spec: &ValueSpec,
    decl_index: usize,
    spec_index: usize,
    type_map: &mut HashMap<String, ObjectId>,
    coercions: &mut Vec<Coercion>,
) {
    for (i, name) in spec.names.iter().enumerate() {
        let declared = spec.type_for(i).map(|ty| ty.name.clone());
        let value_kind = spec
            .values
            .get(i)
            .and_then(|value| kind_of_expr(file, objects, value));

        match (&declared, &value_kind) {
            (Some(declared), Some(value_kind)) if declared != value_kind => {
                if widens(value_kind, declared) {
                    coercions.push(Coercion {
                        decl: decl_index,
                        spec: spec_index,
                        value: i,
                        kind: declared.clone(),
                    });
                } else {
                    handler.error_at(
                        DiagnosticKind::TypeMismatch {
                            declared: declared.clone(),
                            value: value_kind.clone(),
                        },
                        spec.values[i].pos().clone(),
                    );
                    continue;
                }
            }
            _ => {}
        }

        // Declared type wins; otherwise fall back to the initializer's kind.
        let kind = declared.or(value_kind);
        if let Some(id) = kind.and_then(|kind| UNIVERSE.lookup(&kind)) {
            type_map.insert(name.name.clone(), id);
        }
    }
}

fn widens(from: &str, to: &str) -> bool {
    match (NUM_RANK.get(from), NUM_RANK.get(to)) {
        (Some(from), Some(to)) => from < to,
        _ => false,
    }
}

/// The kind an expression evaluates to, when it can be read off the tree.
/// `None` means the spec is skipped rather than reported; only expressions
/// with a known kind are held against the declared type.
fn kind_of_expr(file: &File, objects: &Objects, expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(lit) => Some(lit.kind.clone()),
        Expr::Ident(ident) => kind_of_object(file, objects, ident.obj?),
        Expr::Binary(binary) => kind_of_expr(file, objects, &binary.left)
            .or_else(|| kind_of_expr(file, objects, &binary.right)),
        Expr::Assign(_) => None,
    }
}

/// The declared type of an object, found by navigating its declaration site.
/// Only explicit annotations are followed; an unannotated name yields `None`
/// even when its initializer would pin it down, which also keeps a
/// self-referential initializer from sending the lookup in circles.
fn kind_of_object(file: &File, objects: &Objects, id: ObjectId) -> Option<String> {
    let object = objects.get(id);
    match object.kind {
        ObjKind::Type => Some(object.name.clone()),
        ObjKind::Func => None,
        ObjKind::Var => match object.decl? {
            DeclRef::Spec { decl, spec } => {
                let Decl::Store(store) = &file.decls[decl] else {
                    return None;
                };
                let spec = &store.specs[spec];
                let index = spec.names.iter().position(|name| name.name == object.name)?;
                spec.type_for(index).map(|ty| ty.name.clone())
            }
            DeclRef::Func { .. } | DeclRef::Param { .. } | DeclRef::LocalSpec => None,
        },
    }
}

/// Rewrites every literal inside `expr` to the coerced kind.
fn widen_literals(expr: &mut Expr, kind: &str) {
    match expr {
        Expr::Lit(lit) => lit.kind = String::from(kind),
        Expr::Binary(binary) => {
            widen_literals(&mut binary.left, kind);
            widen_literals(&mut binary.right, kind);
        }
        Expr::Ident(_) => {}
        Expr::Assign(assign) => {
            for rhs in &mut assign.rhs {
                widen_literals(rhs, kind);
            }
        }
    }
}
