use std::fs;

use clap::Parser;
use eqnp::parse_expression;

/// eqnp parses textual mathematical equations into syntax trees.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells eqnp to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed syntax tree in debug form instead of re-rendering
    /// the expression.
    #[arg(short, long)]
    tree: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match parse_expression(&expression) {
        Ok(expr) => {
            if args.tree {
                println!("{expr:#?}");
            } else {
                println!("{expr}");
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
