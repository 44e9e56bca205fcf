use std::{io, path::Path};

use clap::Parser;
use env_logger::Env;
use linecalc::{
    DriverError, compile,
    output::{OutputOptions, read_document, write_results},
};

/// linecalc compiles and evaluates a document of arithmetic expressions, one
/// expression per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linecalc to read the document from a file instead of the
    /// command line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints each line's expression tree instead of its value.
    #[arg(short, long)]
    tree: bool,

    /// Prefixes every output line with its line number.
    #[arg(short, long)]
    numbered: bool,

    /// Logs every compiled line. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// The document, or its path with `--file`. Read from standard input when
    /// omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), DriverError> {
    let document = match args.contents {
        Some(contents) if !args.file => contents,
        Some(path) => read_document(Some(Path::new(&path)))?,
        None => read_document(None)?,
    };

    let options = OutputOptions { tree:     args.tree,
                                  numbered: args.numbered, };

    write_results(&compile(&document), options, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn file_flag_needs_a_path() {
        let err = Args::try_parse_from(["linecalc", "--file"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn file_flag_takes_the_contents_as_a_path() {
        let args = Args::try_parse_from(["linecalc", "-f", "document.calc"]).unwrap();

        assert!(args.file);
        assert_eq!(args.contents.as_deref(), Some("document.calc"));
    }
}
