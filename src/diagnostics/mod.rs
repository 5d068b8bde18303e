//! Canonical message templates shared by every stage of the toolchain.
//!
//! Errors never build their text ad hoc; they resolve a [`Diagnostic`] key
//! through [`message`] with an explicit [`Locale`]. Templates carry no source
//! position; callers add it.

pub mod catalog;

pub use catalog::{message, Diagnostic, Locale, UnknownLocale};

#[cfg(test)]
mod tests;
