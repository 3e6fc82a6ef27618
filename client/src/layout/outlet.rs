//! Router-backed nested-view handle.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::shell::NestedViews;

/// Resolves the content slot through `leptos_router`'s `<Outlet/>`.
///
/// The outlet tracks the active child route reactively and renders nothing
/// when no child matches, so the slot is always `Some` here and may still
/// render empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouterOutlet;

impl NestedViews for RouterOutlet {
    type View = AnyView;

    fn active_view(&self) -> Option<AnyView> {
        Some(view! { <Outlet/> }.into_any())
    }
}
