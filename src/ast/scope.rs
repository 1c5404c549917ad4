use std::collections::HashMap;

use super::object::ObjectId;

/// A lexically nested name→object map, chained via parent links.
///
/// Insertion into a scope shadows, but never mutates, an outer binding of
/// the same name; lookup walks the parent chain until found or exhausted.
/// Scopes are created per resolution pass and discarded with it.
#[derive(Debug, Default)]
pub struct Scope {
    parent: Option<Box<Scope>>,
    objects: HashMap<String, ObjectId>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// A fresh scope nested inside `parent`.
    pub fn nested(parent: Scope) -> Self {
        Scope {
            parent: Some(Box::new(parent)),
            objects: HashMap::new(),
        }
    }

    /// Discards this scope, handing back its parent.
    pub fn into_parent(self) -> Option<Scope> {
        self.parent.map(|parent| *parent)
    }

    pub fn insert(&mut self, name: &str, id: ObjectId) {
        self.objects.insert(String::from(name), id);
    }

    pub fn lookup(&self, name: &str) -> Option<ObjectId> {
        match self.objects.get(name) {
            Some(id) => Some(*id),
            None => self.parent.as_ref().and_then(|parent| parent.lookup(name)),
        }
    }
}
