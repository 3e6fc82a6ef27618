//! Pages nested under the club shell.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Club landing page; heading follows the `club_id` route segment.
#[component]
pub fn ClubOverviewPage() -> impl IntoView {
    let params = use_params_map();
    let club_id = move || params.read().get("club_id").unwrap_or_default();

    view! {
        <section class="club-page">
            <h1>{club_id}</h1>
        </section>
    }
}

#[component]
pub fn ClubMembersPage() -> impl IntoView {
    view! {
        <section class="club-page">
            <h1>"Members"</h1>
        </section>
    }
}

#[component]
pub fn ClubEventsPage() -> impl IntoView {
    view! {
        <section class="club-page">
            <h1>"Events"</h1>
        </section>
    }
}
