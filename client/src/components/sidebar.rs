//! Collapsible sidebar listing the console's menu groups.
//!
//! DESIGN
//! ======
//! All selection and expansion state lives in `NavStore`; this component only
//! reads it and forwards clicks, so every mounted copy stays in sync.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::nav::{MENU_GROUPS, MenuGroup, MenuItem, NavState, NavStore};
use crate::state::session::SessionState;

/// True when `group` is the active top-level menu.
#[must_use]
pub fn is_group_active(state: &NavState, group: &str) -> bool {
    state.active_menu.as_deref() == Some(group)
}

/// True when `item` is the active sub-menu.
#[must_use]
pub fn is_item_active(state: &NavState, item: &str) -> bool {
    state.active_sub_menu.as_deref() == Some(item)
}

/// Left navigation sidebar.
#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = expect_context::<NavStore>();
    let session = expect_context::<RwSignal<SessionState>>();

    let user_name = move || session.with(|state| state.session.as_ref().map(|s| s.user.name.clone()).unwrap_or_default());

    let on_logout = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            session.set(SessionState::resolved(None));
        });
    };

    let groups = MENU_GROUPS.iter().map(|group| render_group(nav, *group)).collect_view();

    view! {
        <aside class="sidebar">
            <nav class="sidebar__nav">{groups}</nav>
            <div class="sidebar__footer">
                <span class="sidebar__user">{user_name}</span>
                <button class="sidebar__logout" on:click=on_logout>"Sign out"</button>
            </div>
        </aside>
    }
}

fn render_group(nav: NavStore, group: MenuGroup) -> impl IntoView {
    let on_toggle = move |_ev: leptos::ev::MouseEvent| {
        nav.set_active_menu(Some(group.id.to_owned()));
        nav.toggle_expanded(group.id);
    };
    let is_active = move || nav.with(|s| is_group_active(s, group.id));
    let is_expanded = move || nav.with(|s| s.is_expanded(group.id));

    view! {
        <div class="sidebar__group" class:sidebar__group--active=is_active>
            <button class="sidebar__group-toggle" on:click=on_toggle>
                {group.label}
            </button>
            <Show when=is_expanded>
                <ul class="sidebar__items">
                    {group.items.iter().map(|item| render_item(nav, *item)).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

fn render_item(nav: NavStore, item: MenuItem) -> impl IntoView {
    let on_select = move |_ev: leptos::ev::MouseEvent| nav.set_active_sub_menu(Some(item.id.to_owned()));
    let is_active = move || nav.with(|s| is_item_active(s, item.id));

    view! {
        <li class="sidebar__item" class:sidebar__item--active=is_active>
            <a href=item.href on:click=on_select>
                {item.label}
            </a>
        </li>
    }
}
