use leptos::prelude::*;

use super::dom::BrowserPage;
use crate::{
    navigation::{navigate, navigate_to_anchor, NavMenu},
    sections::{SectionId, SECTIONS},
};

/// Shared handle for the "navigate to section" command.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    menu: RwSignal<NavMenu>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            menu: RwSignal::new(NavMenu::default()),
        }
    }

    pub fn go(&self, id: SectionId) {
        let mut menu = self.menu.get_untracked();
        if let Err(e) = navigate(&BrowserPage, &mut menu, id) {
            log::debug!("navigation skipped: {e}");
        }
        self.menu.set(menu);
    }

    /// Scrolls to the section named by the URL fragment, e.g. `/#projects`.
    pub fn follow_location_hash(&self) {
        let hash = match window().location().hash() {
            Ok(hash) if !hash.is_empty() => hash,
            _ => return,
        };
        let mut menu = self.menu.get_untracked();
        if let Err(e) = navigate_to_anchor(&BrowserPage, &mut menu, &hash) {
            log::debug!("ignoring location hash {hash}: {e}");
        }
        self.menu.set(menu);
    }

    fn toggle_menu(&self) {
        self.menu.update(NavMenu::toggle);
    }

    fn menu_open(&self) -> bool {
        self.menu.get().open
    }
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

#[component]
pub fn NavigationBar(active: ReadSignal<SectionId>) -> impl IntoView {
    let nav = use_navigator();

    view! {
        <nav class="fixed top-6 left-1/2 -translate-x-1/2 z-50 hidden md:block nav-enter">
            <div class="bg-card/80 backdrop-blur-lg border border-border rounded-full px-6 py-3 shadow-lg">
                <ul class="flex space-x-8">
                    {SECTIONS
                        .iter()
                        .map(|section| {
                            let id = section.id;
                            view! {
                                <li>
                                    <button
                                        on:click=move |_| nav.go(id)
                                        class=move || {
                                            if active.get() == id {
                                                "text-sm font-medium transition-colors duration-200 hover:text-primary text-primary"
                                            } else {
                                                "text-sm font-medium transition-colors duration-200 hover:text-primary text-muted-foreground"
                                            }
                                        }
                                    >
                                        {section.label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
        <div class="fixed top-6 right-6 z-50 md:hidden nav-enter-scale">
            <button
                on:click=move |_| nav.toggle_menu()
                aria-label="Toggle navigation menu"
                class="p-3 bg-card/80 backdrop-blur-lg border border-border rounded-full shadow-lg text-foreground"
            >
                {move || if nav.menu_open() { "✕" } else { "☰" }}
            </button>
            <div class=move || {
                if nav.menu_open() {
                    "absolute top-16 right-0 bg-card/95 backdrop-blur-lg border border-border rounded-2xl shadow-xl p-4 min-w-[200px] block menu-open"
                } else {
                    "absolute top-16 right-0 bg-card/95 backdrop-blur-lg border border-border rounded-2xl shadow-xl p-4 min-w-[200px] hidden"
                }
            }>
                <ul class="space-y-2">
                    {SECTIONS
                        .iter()
                        .map(|section| {
                            let id = section.id;
                            view! {
                                <li>
                                    <button
                                        on:click=move |_| nav.go(id)
                                        class=move || {
                                            if active.get() == id {
                                                "w-full flex items-center space-x-3 px-4 py-3 rounded-lg text-sm font-medium transition-colors duration-200 hover:bg-muted text-primary bg-primary/10"
                                            } else {
                                                "w-full flex items-center space-x-3 px-4 py-3 rounded-lg text-sm font-medium transition-colors duration-200 hover:bg-muted text-muted-foreground hover:text-foreground"
                                            }
                                        }
                                    >
                                        <i class=section.icon></i>
                                        <span>{section.label}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
