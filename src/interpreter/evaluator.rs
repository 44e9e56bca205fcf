/// Binary operator evaluation.
///
/// Implements the four arithmetic operators on native floating point values.
pub mod binary;

/// Core evaluation logic.
///
/// Evaluates nodes and parse results, and maps a compiled document to its
/// values.
pub mod core;
