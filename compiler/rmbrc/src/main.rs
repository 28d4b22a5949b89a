//! rmbr CLI
//!
//! Generates memoized factories and savers for annotated state holders.

use rmbrc::commands::{
    check_declarations, explain_error, generate_declarations, parse_generate_args,
};

fn main() {
    rmbrc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let success = match command.as_str() {
        "generate" | "check" => {
            let parsed = match parse_generate_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!();
                    eprintln!("Run `rmbr help` for usage.");
                    std::process::exit(1);
                }
            };
            if command == "generate" {
                generate_declarations(&parsed)
            } else {
                check_declarations(&parsed)
            }
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: rmbr explain <ERROR_CODE>");
                eprintln!("Example: rmbr explain E3002");
                std::process::exit(1);
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("rmbr {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !success {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("rmbr: memoized factories and savers for annotated state holders");
    println!();
    println!("Usage: rmbr <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <input> -o <dir>  Generate units for every annotated class");
    println!("  check <input>              Validate declarations without generating");
    println!("  explain <code>             Explain an error code (e.g., E3002)");
    println!("  help                       Show this help message");
    println!("  version                    Show version information");
    println!();
    println!("<input> is a declaration JSON file or a directory of them.");
    println!();
    println!("Options:");
    println!("  -o, --output <dir>         Output root for generated files");
    println!("  --check                    Fail if generated files are out of date, write nothing");
    println!("  --injection=<mode>         Default injection mode: none, framework");
    println!("  --no-parallel              Process classes sequentially");
    println!("  --timestamp                Append a `// Generated at` line to each file");
    println!("  --option <key=value>       Processor option, e.g. rmbr.injectionType=koin");
    println!("  --color=<mode>             Diagnostic colors: auto, always, never");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) for tracing output.");
}
