//! Sidebar for the admin area.

use leptos::prelude::*;

use crate::components::nav::admin_nav_items;
use crate::components::sidebar::Sidebar;

#[component]
pub fn AdminNav() -> impl IntoView {
    view! { <Sidebar title="Administration" items=Signal::derive(admin_nav_items)/> }
}
