use std::rc::Rc;

use crate::errors::errors::{DiagnosticKind, ErrorHandler};
use crate::Location;

use super::tokens::{lookup_ident, Symbol, SymbolKind};

/// Converts a byte buffer into a lazy stream of located symbols.
///
/// The lexer is a pure function of its cursor state: one byte of lookahead,
/// no backtracking. Once the input is exhausted it keeps returning the same
/// end-of-file symbol.
pub struct Lexer<'e> {
    input: Vec<u8>,
    offset: usize,
    ch: u8,
    loc: Location,
    handler: &'e ErrorHandler,
}

impl<'e> Lexer<'e> {
    pub fn new(file_name: &str, input: Vec<u8>, handler: &'e ErrorHandler) -> Self {
        let ch = input.first().copied().unwrap_or(0);
        let mut loc = Location::new(1, 1, Rc::new(String::from(file_name)));
        // The same bookkeeping next() applies when it lands on a newline,
        // so a file opening with a blank line starts counting at line 2.
        if ch == b'\n' {
            loc.line = 2;
            loc.column = 0;
        }
        Lexer {
            input,
            offset: 0,
            ch,
            loc,
            handler,
        }
    }

    fn next(&mut self) {
        self.offset += 1;
        if self.offset >= self.input.len() {
            self.ch = 0;
            return;
        }

        self.ch = self.input[self.offset];

        if self.ch == b'\n' {
            self.loc.column = 0;
            self.loc.line += 1;
        } else {
            self.loc.column += 1;
        }
    }

    fn peek(&self) -> u8 {
        self.input.get(self.offset + 1).copied().unwrap_or(0)
    }

    /// Produces the next symbol. Idempotent at end of input.
    pub fn next_symbol(&mut self) -> Symbol {
        self.skip_whitespace();

        let loc = self.loc.clone();
        let sym = match self.ch {
            0 => return Symbol::new(SymbolKind::Eof, "", loc),
            b'=' => {
                if self.peek() == b'=' {
                    self.next();
                    Symbol::new(SymbolKind::Eq, "==", loc)
                } else {
                    Symbol::new(SymbolKind::Assign, "=", loc)
                }
            }
            b'+' => Symbol::new(SymbolKind::Plus, "+", loc),
            b'-' => {
                if self.peek() == b'>' {
                    self.next();
                    Symbol::new(SymbolKind::Arrow, "->", loc)
                } else {
                    Symbol::new(SymbolKind::Minus, "-", loc)
                }
            }
            b'*' => Symbol::new(SymbolKind::Star, "*", loc),
            b'/' => Symbol::new(SymbolKind::Slash, "/", loc),
            b'<' => Symbol::new(SymbolKind::Lt, "<", loc),
            b'>' => Symbol::new(SymbolKind::Gt, ">", loc),
            b':' => Symbol::new(SymbolKind::Colon, ":", loc),
            b',' => Symbol::new(SymbolKind::Comma, ",", loc),
            b'{' => Symbol::new(SymbolKind::LBrace, "{", loc),
            b'}' => Symbol::new(SymbolKind::RBrace, "}", loc),
            b'(' => Symbol::new(SymbolKind::LParen, "(", loc),
            b')' => Symbol::new(SymbolKind::RParen, ")", loc),
            b'"' => {
                let s = self.read_string(&loc);
                return Symbol::new(SymbolKind::Str, s, loc);
            }
            ch if is_letter(ch) => {
                let ident = self.read_identifier();
                return Symbol::new(lookup_ident(&ident), ident, loc);
            }
            ch if is_digit(ch) => {
                let (kind, num) = self.read_number();
                return Symbol::new(kind, num, loc);
            }
            ch => Symbol::new(SymbolKind::Illegal, (ch as char).to_string(), loc),
        };

        self.next();
        sym
    }

    fn skip_whitespace(&mut self) {
        while is_whitespace(self.ch) {
            self.next();
        }
    }

    fn read_string(&mut self, start: &Location) -> String {
        let offset = self.offset + 1;
        loop {
            self.next();
            if self.ch == b'"' || self.ch == 0 {
                break;
            }
        }

        if self.ch == 0 {
            self.handler
                .error_at(DiagnosticKind::UnterminatedString, start.clone());
            return String::from_utf8_lossy(&self.input[offset..self.offset]).into_owned();
        }

        let content = String::from_utf8_lossy(&self.input[offset..self.offset]).into_owned();
        self.next();
        content
    }

    fn read_identifier(&mut self) -> String {
        let offset = self.offset;
        while is_letter(self.ch) || is_digit(self.ch) {
            self.next();
        }
        String::from_utf8_lossy(&self.input[offset..self.offset]).into_owned()
    }

    fn read_number(&mut self) -> (SymbolKind, String) {
        let offset = self.offset;
        let mut kind = SymbolKind::Int;
        while is_digit(self.ch) || (self.ch == b'.' && kind == SymbolKind::Int) {
            if self.ch == b'.' {
                kind = SymbolKind::Float;
            }
            self.next();
        }
        (
            kind,
            String::from_utf8_lossy(&self.input[offset..self.offset]).into_owned(),
        )
    }
}

fn is_whitespace(ch: u8) -> bool {
    ch == b' ' || ch == b'\t' || ch == b'\n'
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_uppercase() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
