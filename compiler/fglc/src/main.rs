//! FGL front-end CLI.

use fglc::commands::{check_file, lex_file, parse_file, CheckOptions};

fn main() {
    fglc::tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: fglc lex <file.4gl>");
                std::process::exit(1);
            }
            if let Err(msg) = lex_file(&args[2]) {
                fail(&msg);
            }
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: fglc parse <file.4gl>");
                std::process::exit(1);
            }
            if let Err(msg) = parse_file(&args[2]) {
                fail(&msg);
            }
        }
        "check" => {
            let (options, path) = match CheckOptions::parse(&args[2..]) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: fglc check <file.4gl> [options]");
                    std::process::exit(1);
                }
            };
            match check_file(&path, &options) {
                Ok(summary) if summary.has_errors() => std::process::exit(1),
                Ok(_) => {}
                Err(msg) => fail(&msg),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("fglc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn print_usage() {
    println!("FGL front end");
    println!();
    println!("Usage: fglc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.4gl>       Tokenize and display tokens");
    println!("  parse <file.4gl>     Parse and display a statement outline");
    println!("  check <file.4gl>     Report lexical, syntax and resolution errors");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --symbols=<file>    Names defined outside the file, one per line");
    println!("  --no-check          Skip name resolution");
    println!("  --color=<mode>      auto (default), always, never");
    println!("  --limit=<n>         Stop after n errors (0 = unlimited, default 50)");
    println!();
    println!("Environment:");
    println!("  FGL_LOG=<filter>    Enable tracing, e.g. FGL_LOG=fgl_parse=debug");
}
