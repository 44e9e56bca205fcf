/// Core parsing logic.
///
/// Contains the right-to-left scan that turns one line into a `ParseResult`.
pub mod core;
/// Utility functions for the parser.
///
/// Token expectations shared by the different states of the scan.
pub mod utils;
