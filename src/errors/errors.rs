use std::cell::{Cell, RefCell};
use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::SymbolKind;
use crate::Location;

/// Diagnostic severity. `Error` gates progress to the next pipeline stage,
/// `Warn` is informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Error => write!(f, "\x1b[31m[ERROR]\x1b[0m"),
            Level::Warn => write!(f, "\x1b[33m[WARN]\x1b[0m"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("expected {expected}, got `{got}` (type {got_kind})")]
    UnexpectedSymbol {
        expected: SymbolKind,
        got: String,
        got_kind: SymbolKind,
    },
    #[error("unexpected declaration")]
    UnexpectedDecl,
    #[error("no prefix parse function for {kind}")]
    NoPrefixParseFn { kind: SymbolKind },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("variable assignment mismatch: the number of types must be less than or equal to the number of variables")]
    TypeCountMismatch,
    #[error("variable assignment mismatch: expression count does not match variable count")]
    ValueCountMismatch,
    #[error("unresolved identifier `{name}`")]
    UnresolvedIdent { name: String },
    #[error("cannot assign value of type `{value}` to variable of type `{declared}`")]
    TypeMismatch { declared: String, value: String },
    #[error("could not read file {file}")]
    FileRead { file: String },
}

impl DiagnosticKind {
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticKind::UnexpectedSymbol { .. } => "UnexpectedSymbol",
            DiagnosticKind::UnexpectedDecl => "UnexpectedDecl",
            DiagnosticKind::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            DiagnosticKind::UnterminatedString => "UnterminatedString",
            DiagnosticKind::TypeCountMismatch => "TypeCountMismatch",
            DiagnosticKind::ValueCountMismatch => "ValueCountMismatch",
            DiagnosticKind::UnresolvedIdent { .. } => "UnresolvedIdent",
            DiagnosticKind::TypeMismatch { .. } => "TypeMismatch",
            DiagnosticKind::FileRead { .. } => "FileRead",
        }
    }
}

/// One queued diagnostic: severity, payload, and the source location it
/// points at (absent for file-level messages).
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub level: Level,
    pub kind: DiagnosticKind,
    pub loc: Option<Location>,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.loc {
            Some(loc) => write!(f, "{} {} {}", loc, self.level, self.kind),
            None => write!(f, "{} {}", self.level, self.kind),
        }
    }
}

/// Process-wide diagnostic sink. One handler is shared by reference across
/// every stage operating on the same file; stages append and keep walking,
/// and only the driver's gate terminates.
#[derive(Debug, Default)]
pub struct ErrorHandler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    emitted: Cell<usize>,
}

impl ErrorHandler {
    pub fn new() -> Self {
        ErrorHandler::default()
    }

    pub fn report(&self, level: Level, kind: DiagnosticKind, loc: Option<Location>) {
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic { level, kind, loc });
    }

    pub fn error(&self, kind: DiagnosticKind) {
        self.report(Level::Error, kind, None);
    }

    pub fn error_at(&self, kind: DiagnosticKind, loc: Location) {
        self.report(Level::Error, kind, Some(loc));
    }

    pub fn warn_at(&self, kind: DiagnosticKind, loc: Location) {
        self.report(Level::Warn, kind, Some(loc));
    }

    /// Whether any `Error`-level diagnostic has been queued. Warnings do not
    /// gate the pipeline.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Snapshot of the queue in insertion order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Prints every not-yet-printed diagnostic to stderr in insertion order,
    /// then terminates the process with a non-zero status if any queued
    /// diagnostic is an error. A no-op on an empty queue.
    pub fn fail_if_any(&self) {
        let diagnostics = self.diagnostics.borrow();
        for diagnostic in &diagnostics[self.emitted.get()..] {
            eprintln!("{}", diagnostic);
        }
        self.emitted.set(diagnostics.len());
        if diagnostics.iter().any(|d| d.level == Level::Error) {
            std::process::exit(1);
        }
    }
}
