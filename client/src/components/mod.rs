//! Chrome components embedded by the layout shells.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shells treat these as opaque renderable units; link targets come from the
//! pure builders in `nav` so they can be tested without a browser.

pub mod admin_nav;
pub mod club_nav;
pub mod nav;
pub mod sidebar;
