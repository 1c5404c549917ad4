use std::fmt::Display;

/// Index of an [`Object`] in the per-file [`Objects`] arena.
///
/// The first [`super::universe::PREDECLARED`] entries of every arena are the
/// universe objects, so universe ids are stable across files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

impl Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjKind {
    Var,
    Func,
    /// A predeclared primitive type; the object's name doubles as its kind
    /// tag (`i32`, `f64`, …).
    Type,
}

impl Display for ObjKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjKind::Var => write!(f, "VAR"),
            ObjKind::Func => write!(f, "FUNC"),
            ObjKind::Type => write!(f, "TYPE"),
        }
    }
}

/// Non-owning index path from an object back to its declaration site.
/// The declaration owns the object conceptually, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclRef {
    /// `File.decls[decl]` is a store declaration; the object belongs to its
    /// `specs[spec]`. The only variant the type checker navigates.
    Spec { decl: usize, spec: usize },
    /// `File.decls[decl]` is the function this object names.
    Func { decl: usize },
    /// A parameter field of `File.decls[decl]`.
    Param { decl: usize },
    /// A spec inside a function body; outside the checked subset.
    LocalSpec,
}

/// A binding record: a declared variable, function, or predeclared type.
/// `decl` is `None` exactly for universe objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub kind: ObjKind,
    pub name: String,
    pub decl: Option<DeclRef>,
}

/// Arena of every object created for one file. Built by the parser (which
/// binds declaration names eagerly) and read-only from then on: the resolver
/// and checker only hand out `ObjectId`s.
#[derive(Debug)]
pub struct Objects {
    objects: Vec<Object>,
}

impl Objects {
    /// An arena pre-seeded with the universe objects.
    pub fn new() -> Self {
        let objects = super::universe::PREDECLARED
            .iter()
            .map(|name| Object {
                kind: ObjKind::Type,
                name: String::from(*name),
                decl: None,
            })
            .collect();
        Objects { objects }
    }

    pub fn alloc(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        id
    }

    pub fn get(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Objects {
    fn default() -> Self {
        Objects::new()
    }
}
