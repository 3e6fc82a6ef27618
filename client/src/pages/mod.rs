//! Page modules for the routes nested inside each shell.
//!
//! ARCHITECTURE
//! ============
//! Pages only fill the content region; sidebars and framing come from the
//! enclosing `layout` shell.

pub mod admin;
pub mod club;
