//! Sidebar navigation state (active menu, active sub-menu, expanded groups).
//!
//! DESIGN
//! ======
//! `NavState` is a plain value with three mutators. `NavStore` wraps it in a
//! single `RwSignal` so every mutation notifies subscribed views in one step;
//! views never observe a half-applied update.
//!
//! Identifiers are not checked against `MENU_GROUPS`. Unknown menus are
//! stored as given, and active/expanded fields may disagree with each other.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::HashSet;

use leptos::prelude::*;

/// Top-level menu selected when a session starts.
pub const DEFAULT_ACTIVE_MENU: &str = "데이터관리";

/// One entry under a sidebar group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

/// A collapsible sidebar group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub items: &'static [MenuItem],
}

/// Sidebar taxonomy rendered by `components::sidebar`.
pub const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        id: "데이터관리",
        label: "데이터관리",
        items: &[
            MenuItem { id: "catalog", label: "Catalogs", href: "/catalogs" },
            MenuItem { id: "project", label: "Projects", href: "/projects" },
        ],
    },
    MenuGroup {
        id: "인프라",
        label: "인프라",
        items: &[
            MenuItem { id: "cluster", label: "Clusters", href: "/clusters" },
            MenuItem { id: "dns", label: "DNS", href: "/dns" },
        ],
    },
    MenuGroup {
        id: "고객",
        label: "고객",
        items: &[MenuItem { id: "customers", label: "Customers", href: "/customers" }],
    },
    MenuGroup {
        id: "settings",
        label: "Settings",
        items: &[
            MenuItem { id: "general", label: "General", href: "/settings" },
            MenuItem { id: "license", label: "Licenses", href: "/licenses" },
        ],
    },
];

/// Navigation state for the sidebar widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub active_menu: Option<String>,
    pub active_sub_menu: Option<String>,
    pub expanded_menus: HashSet<String>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active_menu: Some(DEFAULT_ACTIVE_MENU.to_owned()),
            active_sub_menu: None,
            expanded_menus: HashSet::new(),
        }
    }
}

impl NavState {
    pub fn set_active_menu(&mut self, menu: Option<String>) {
        self.active_menu = menu;
    }

    pub fn set_active_sub_menu(&mut self, sub_menu: Option<String>) {
        self.active_sub_menu = sub_menu;
    }

    /// Flip membership of `menu` in the expanded set.
    pub fn toggle_expanded(&mut self, menu: &str) {
        if !self.expanded_menus.remove(menu) {
            self.expanded_menus.insert(menu.to_owned());
        }
    }

    #[must_use]
    pub fn is_expanded(&self, menu: &str) -> bool {
        self.expanded_menus.contains(menu)
    }
}

/// Shared handle to the navigation state, provided via context.
///
/// `Copy` so closures in view code can capture it freely.
#[derive(Clone, Copy, Debug)]
pub struct NavStore(RwSignal<NavState>);

impl NavStore {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(NavState::default()))
    }

    /// Tracked read; re-runs the calling view or effect on change.
    pub fn with<U>(&self, f: impl FnOnce(&NavState) -> U) -> U {
        self.0.with(f)
    }

    pub fn with_untracked<U>(&self, f: impl FnOnce(&NavState) -> U) -> U {
        self.0.with_untracked(f)
    }

    pub fn set_active_menu(&self, menu: Option<String>) {
        self.0.update(|state| state.set_active_menu(menu));
    }

    pub fn set_active_sub_menu(&self, sub_menu: Option<String>) {
        self.0.update(|state| state.set_active_sub_menu(sub_menu));
    }

    pub fn toggle_expanded(&self, menu: &str) {
        self.0.update(|state| state.toggle_expanded(menu));
    }
}

impl Default for NavStore {
    fn default() -> Self {
        Self::new()
    }
}
