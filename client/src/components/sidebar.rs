//! Sidebar chrome shared by the admin and club navigation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nav::NavItem;

/// Fixed-width sidebar with a title and a list of links.
#[component]
pub fn Sidebar(
    /// Heading shown above the links.
    title: &'static str,
    #[prop(into)] items: Signal<Vec<NavItem>>,
) -> impl IntoView {
    view! {
        <aside class="sidebar w-64 shrink-0 border-r">
            <h2 class="sidebar__title">{title}</h2>
            <nav>
                <ul class="sidebar__links">
                    <For each=move || items.get() key=|item| item.href.clone() let:item>
                        <li>
                            <A href=item.href exact=item.exact>{item.label}</A>
                        </li>
                    </For>
                </ul>
            </nav>
        </aside>
    }
}
