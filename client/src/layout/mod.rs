//! Layout shells registered as parent routes.
//!
//! ARCHITECTURE
//! ============
//! `LayoutShell` is the single template; each area binds it to a chrome
//! producer through a static `ShellConfig`. Adding an area means adding one
//! static and one zero-prop wrapper component.

mod outlet;
pub mod shell;

use leptos::prelude::*;

use crate::components::admin_nav::AdminNav;
use crate::components::club_nav::ClubNav;


pub use outlet::RouterOutlet;
pub use shell::{CONTENT_CLASS, NestedViews, ROOT_CLASS, ShellConfig, ShellFrame, ShellVariant};

pub static ADMIN_SHELL: ShellConfig<AnyView> = ShellConfig::new(ShellVariant::Admin, admin_chrome);
pub static CLUB_SHELL: ShellConfig<AnyView> = ShellConfig::new(ShellVariant::Club, club_chrome);

fn admin_chrome() -> AnyView {
    view! { <AdminNav/> }.into_any()
}

fn club_chrome() -> AnyView {
    view! { <ClubNav/> }.into_any()
}

/// Sidebar plus padded content region filled by the active child route.
#[component]
pub fn LayoutShell(config: &'static ShellConfig<AnyView>) -> impl IntoView {
    let ShellFrame { variant, chrome, content } = config.compose(&RouterOutlet);

    view! {
        <div class=ROOT_CLASS data-shell=variant.as_str()>
            {chrome}
            <main class=CONTENT_CLASS>{content}</main>
        </div>
    }
}

#[component]
pub fn AdminShell() -> impl IntoView {
    view! { <LayoutShell config=&ADMIN_SHELL/> }
}

#[component]
pub fn ClubShell() -> impl IntoView {
    view! { <LayoutShell config=&CLUB_SHELL/> }
}
