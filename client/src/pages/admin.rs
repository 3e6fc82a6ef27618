//! Pages nested under the admin shell.

use leptos::prelude::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <section class="admin-page">
            <h1>"Dashboard"</h1>
            <p>"Overview of every club on the platform."</p>
        </section>
    }
}

#[component]
pub fn AdminClubsPage() -> impl IntoView {
    view! {
        <section class="admin-page">
            <h1>"Clubs"</h1>
        </section>
    }
}

#[component]
pub fn AdminMembersPage() -> impl IntoView {
    view! {
        <section class="admin-page">
            <h1>"Members"</h1>
        </section>
    }
}
