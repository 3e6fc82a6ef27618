//! Root application component and route table.
//!
//! Each area is a `ParentRoute` whose view is a layout shell; the nested
//! `Route`s decide what the shell's outlet shows.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::layout::{AdminShell, ClubShell};
use crate::pages::admin::{AdminClubsPage, AdminDashboardPage, AdminMembersPage};
use crate::pages::club::{ClubEventsPage, ClubMembersPage, ClubOverviewPage};
use crate::paths::ADMIN_ROOT;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/clubhouse.css"/>
        <Title text="Clubhouse"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=ADMIN_ROOT/> }/>
                <ParentRoute path=StaticSegment("admin") view=AdminShell>
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                    <Route path=StaticSegment("clubs") view=AdminClubsPage/>
                    <Route path=StaticSegment("members") view=AdminMembersPage/>
                </ParentRoute>
                <ParentRoute path=(StaticSegment("club"), ParamSegment("club_id")) view=ClubShell>
                    <Route path=StaticSegment("") view=ClubOverviewPage/>
                    <Route path=StaticSegment("members") view=ClubMembersPage/>
                    <Route path=StaticSegment("events") view=ClubEventsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
