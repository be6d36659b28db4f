//! Type definitions for JSON Pointer.

/// A single step in a parsed JSON Pointer path.
///
/// Array indices are carried as their decimal string form; they are only
/// interpreted as numbers when resolved against an array.
pub type PathStep = String;

/// A parsed JSON Pointer path.
///
/// The root pointer (`""`) parses to an empty path.
pub type Path = Vec<PathStep>;
