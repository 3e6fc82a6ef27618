//! Sidebar for a single club's area.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav::club_nav_items;
use crate::components::sidebar::Sidebar;

/// Club sidebar. Links follow the `club_id` segment of the current route.
#[component]
pub fn ClubNav() -> impl IntoView {
    let params = use_params_map();
    let items = Signal::derive(move || {
        let club_id = params.read().get("club_id").unwrap_or_default();
        club_nav_items(&club_id)
    });

    view! { <Sidebar title="Club" items=items/> }
}
