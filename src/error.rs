/// Compilation diagnostics.
///
/// Defines the diagnostic produced when a line cannot be compiled. A
/// diagnostic records what the parser expected, the token it found instead
/// and the line it happened on.
pub mod diagnostic;
/// Driver errors.
///
/// Contains the errors raised while reading a document or writing results.
/// These are the only failures that stop a run.
pub mod driver_error;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use driver_error::DriverError;
