//! Error types for the lexer and the token stream.
//!
//! Every error carries the source position it was raised at. Its text is
//! always resolved through the diagnostic catalog, so wording matches the
//! rest of the toolchain.

pub mod errors;

#[cfg(test)]
mod tests;
