//! Shared helpers for the TUI (text utilities, input widget).

pub mod text;
pub mod text_field;

pub use text::{format_relative, truncate_with_ellipsis};
pub use text_field::TextField;
