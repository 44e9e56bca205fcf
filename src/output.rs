use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use log::info;

use crate::{ast::ParseResult, error::DriverError};

/// Controls how compiled lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print each line's printable tree instead of its value.
    pub tree:     bool,
    /// Prefix each output line with its 1-based line number.
    pub numbered: bool,
}

/// Reads a document from a file, or from standard input when no path is
/// given.
///
/// # Errors
/// Returns `DriverError::ReadFile` or `DriverError::ReadStdin` if the
/// document cannot be read.
pub fn read_document(path: Option<&Path>) -> Result<String, DriverError> {
    if let Some(path) = path {
        info!("reading document from {}", path.display());
        return fs::read_to_string(path).map_err(|source| DriverError::ReadFile { path:
                                                                                     path.to_path_buf(),
                                                                                 source });
    }

    info!("reading document from standard input");
    let mut document = String::new();
    io::stdin().read_to_string(&mut document)
               .map_err(DriverError::ReadStdin)?;
    Ok(document)
}

/// Writes one output line per compiled line.
///
/// # Errors
/// Returns `DriverError::Write` if the sink rejects a write.
///
/// # Example
/// ```
/// use linecalc::{compile, output::{OutputOptions, write_results}};
///
/// let mut out = Vec::new();
/// let options = OutputOptions { tree:     true,
///                               numbered: true, };
///
/// write_results(&compile("2 + 3\n"), options, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "1: + 3 2\n2: VOID\n");
/// ```
pub fn write_results<W: Write>(results: &[ParseResult],
                               options: OutputOptions,
                               out: &mut W)
                               -> Result<(), DriverError> {
    for (index, result) in results.iter().enumerate() {
        let rendered = if options.tree {
            result.to_string()
        } else {
            result.value().to_string()
        };

        if options.numbered {
            writeln!(out, "{}: {rendered}", index + 1)?;
        } else {
            writeln!(out, "{rendered}")?;
        }
    }
    out.flush()?;
    Ok(())
}
