use std::{env, fs, process::exit};

use ibex::ast::pretty;
use ibex::ast::universe::UNIVERSE;
use ibex::errors::errors::{DiagnosticKind, ErrorHandler};
use ibex::lexer::lexer::Lexer;
use ibex::parser::parser::parse_file;
use ibex::resolver::resolver::resolve;
use ibex::type_checker::type_checker::typecheck;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: {} <file>", args[0]);
        exit(2);
    }

    let path = &args[1];
    let handler = ErrorHandler::new();
    let input = match fs::read(path) {
        Ok(input) => input,
        Err(_) => {
            handler.error(DiagnosticKind::FileRead { file: path.clone() });
            handler.fail_if_any();
            return;
        }
    };

    let lexer = Lexer::new(path, input, &handler);
    let (mut file, objects) = parse_file(lexer, &handler);
    handler.fail_if_any();

    let unresolved = resolve(&mut file, &objects, &UNIVERSE, &handler);
    println!("{}", pretty::dump(&file, &objects));
    println!("unresolved items (len = {})", unresolved.len());
    for ident in &unresolved {
        println!("  {}: {}", ident.pos, ident.name);
    }
    handler.fail_if_any();

    let type_map = typecheck(&mut file, &objects, &handler);
    handler.fail_if_any();

    let mut entries: Vec<_> = type_map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    println!("checked types (len = {})", entries.len());
    for (name, id) in entries {
        println!("  {}: {}", name, objects.get(*id).name);
    }
}
