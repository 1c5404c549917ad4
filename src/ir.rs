//! Extension seam for backends.
//!
//! The front end stops at the checked tree; anything that wants to produce
//! an intermediate representation from it implements [`Lower`] against the
//! tree, the object arena, and the checked type map. No backend ships with
//! this crate.

use std::collections::HashMap;

use crate::ast::ast::File;
use crate::ast::object::{ObjectId, Objects};

pub trait Lower {
    type Output;

    fn lower(
        &mut self,
        file: &File,
        objects: &Objects,
        type_map: &HashMap<String, ObjectId>,
    ) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::universe::UNIVERSE;
    use crate::errors::errors::ErrorHandler;
    use crate::lexer::lexer::Lexer;
    use crate::parser::parser::parse_file;
    use crate::resolver::resolver::resolve;
    use crate::type_checker::type_checker::typecheck;

    struct DeclCounter;

    impl Lower for DeclCounter {
        type Output = usize;

        fn lower(
            &mut self,
            file: &File,
            _objects: &Objects,
            _type_map: &HashMap<String, ObjectId>,
        ) -> usize {
            file.decls.len()
        }
    }

    #[test]
    fn test_backend_sees_the_checked_tree() {
        let handler = ErrorHandler::new();
        let input = "var x: i32 = 1 fn main() { }";
        let (mut file, objects) = {
            let lexer = Lexer::new("test.ibx", input.as_bytes().to_vec(), &handler);
            parse_file(lexer, &handler)
        };
        resolve(&mut file, &objects, &UNIVERSE, &handler);
        let type_map = typecheck(&mut file, &objects, &handler);
        assert!(handler.is_empty());

        let count = DeclCounter.lower(&file, &objects, &type_map);
        assert_eq!(count, 2);
    }
}
