use std::{env, time::Instant};

use filterql::{display_error, parse_filter};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: filterql <filter expression>");
        std::process::exit(2);
    }

    let source = &args[1];
    let start = Instant::now();

    match parse_filter(source) {
        Ok(expression) => {
            println!("Parsed in {:?}", start.elapsed());
            println!("{}", expression);
            match serde_json::to_string_pretty(&expression) {
                Ok(json) => println!("{}", json),
                Err(error) => eprintln!("serialization failed: {}", error),
            }
        }
        Err(error) => {
            for diagnostic in error.diagnostics() {
                display_error(source, diagnostic);
            }
            std::process::exit(1);
        }
    }
}
