use lazy_static::lazy_static;

use super::object::ObjectId;
use super::scope::Scope;

/// The predeclared primitive types, in arena order. Every [`super::object::Objects`]
/// arena seeds its first entries from this list so that the ids held by the
/// shared universe scope are valid for any file.
pub const PREDECLARED: [&str; 5] = ["i32", "i64", "f32", "f64", "string"];

lazy_static! {
    /// The process-wide universe scope. Constructed once, read-only after
    /// initialization, and therefore safe to share across any number of
    /// concurrent file analyses. Passed explicitly into the resolver as the
    /// terminal fallback for name lookups.
    pub static ref UNIVERSE: Universe = Universe::new();
}

/// The parentless root scope holding the predeclared primitive type objects.
#[derive(Debug)]
pub struct Universe {
    scope: Scope,
}

impl Universe {
    fn new() -> Self {
        let mut scope = Scope::new();
        for (id, name) in PREDECLARED.iter().enumerate() {
            scope.insert(name, ObjectId(id));
        }
        Universe { scope }
    }

    pub fn lookup(&self, name: &str) -> Option<ObjectId> {
        self.scope.lookup(name)
    }
}
