//! Lox CLI
//!
//! Tree-walking interpreter for Lox.

use loxc::commands::{check_file, lex_file, parse_file, run_file, CliOptions};
use loxc::{init_tracing, EXIT_USAGE};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        std::process::exit(EXIT_USAGE);
    };

    let handler: fn(&str, &CliOptions) -> i32 = match command.as_str() {
        "run" => run_file,
        "check" => check_file,
        "lex" => lex_file,
        "parse" => parse_file,
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            print_usage();
            std::process::exit(EXIT_USAGE);
        }
    };

    // Flags may appear before or after the file path.
    let rest = args.iter().skip(2).map(String::as_str);
    let (flags, paths): (Vec<&str>, Vec<&str>) = rest.partition(|arg| arg.starts_with('-'));
    let [path] = paths.as_slice() else {
        eprintln!("error: expected exactly one file path");
        eprintln!("Usage: lox {command} <file.lox> [options]");
        std::process::exit(EXIT_USAGE);
    };
    let options = match CliOptions::parse(flags) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            std::process::exit(EXIT_USAGE);
        }
    };

    let code = handler(path, &options);
    if code != 0 {
        std::process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: lox <command> <file.lox> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run      Run a script");
    eprintln!("  check    Lex, parse and resolve without running");
    eprintln!("  lex      Print the token stream");
    eprintln!("  parse    Print the syntax tree");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-depth=<N>   Maximum call depth (default: 1024)");
    eprintln!("  --strict          Reject redeclaring a local in the same scope");
    eprintln!("  -v, --verbose     Show error codes and warnings");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LOX_LOG           Tracing filter (falls back to RUST_LOG)");
}
