//! `resolv` command-line tool.

use std::io::{self, Write};

use resolvc::commands::{expand, get, parse};
use resolvc::{init_tracing, CliConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return;
    }
    if matches!(command, "version" | "--version") {
        println!("resolv {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let (config, rest) = match CliConfig::parse(&args[2..], |key| std::env::var(key).ok()) {
        Ok(parsed) => parsed,
        Err(err) => fail(&err),
    };
    init_tracing(config.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match command {
        "get" => {
            if rest.is_empty() {
                eprintln!("Usage: resolv get <variable>... [options]");
                std::process::exit(1);
            }
            get(&config.registry(), &rest, &mut out)
        }
        "expand" => {
            let [input] = rest.as_slice() else {
                eprintln!("Usage: resolv expand <string> [options]");
                std::process::exit(1);
            };
            expand(&config.registry(), input, &mut out)
        }
        "parse" => {
            let [path] = rest.as_slice() else {
                eprintln!("Usage: resolv parse <path>");
                std::process::exit(1);
            };
            parse(path, &mut out)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result.and_then(|()| out.flush().map_err(Into::into)) {
        fail(&err);
    }
}

fn fail(err: &resolv_ir::Error) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("resolv - resolve configuration variables");
    println!();
    println!("Usage: resolv <command> [options]");
    println!();
    println!("Commands:");
    println!("  get <variable>...    Resolve each scheme:value variable");
    println!("  expand <string>      Expand ${{...}} tokens in a string");
    println!("  parse <path>         Show how a path expression is split");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-passes=<n>     Interpolation pass budget (default: 8, env: RESOLV_MAX_PASSES)");
    println!("  --strict             Fail on variables with no registered scheme");
    println!("  --verbose, -v        Debug logging on stderr (RUST_LOG overrides)");
    println!();
    println!("Schemes:");
    println!("  env:NAME                   Environment variable");
    println!("  file:path[//KEY]           KEY=VALUE file, or the whole file");
    println!("  json:path[//keypath]       JSON document");
    println!("  yaml:path[//keypath]       YAML document");
    println!("  toml:path[//keypath]       TOML document");
    println!("  ini:path[//Section.Key]    INI file, DEFAULT section without a dot");
    println!();
    println!("Examples:");
    println!("  resolv get env:HOME");
    println!("  resolv get 'yaml:$CONFIG_DIR/app.yaml//servers.[name=api].port'");
    println!("  resolv expand 'postgres://${{env:DB_USER}}@${{file:.env//DB_HOST}}'");
    println!("  resolv parse 'servers.[host=example.org].port'");
}
