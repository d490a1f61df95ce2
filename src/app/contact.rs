use leptos::prelude::*;

use super::{nav::use_navigator, reveal::Reveal};
use crate::{
    content::{OWNER_NAME, SOCIAL_LINKS},
    sections::SectionId,
};

static BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn ContactSection() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section id=SectionId::Contact.as_str() class="section-padding">
            <div class="container-custom max-w-3xl text-center">
                <Reveal class="mb-12">
                    <h2 class="text-4xl lg:text-5xl font-bold mb-6 text-gradient">"Let's Connect"</h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Open to new opportunities, collaborations, and interesting engineering conversations. The fastest way to reach me is through any of the profiles below."
                    </p>
                </Reveal>
                <Reveal delay_ms=200 class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="card-premium flex items-center gap-3 px-6 py-4 hover-lift"
                                    aria-label=format!("{} Profile", link.label)
                                >
                                    <i class=format!("{} text-2xl text-primary", link.icon) />
                                    <span class="font-medium">{link.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </Reveal>
                <Reveal delay_ms=400 class="mt-12">
                    <button class="btn-ghost" on:click=move |_| nav.go(SectionId::Hero)>
                        "↑ Back to top"
                    </button>
                </Reveal>
            </div>
            <footer class="mt-16 pt-8 border-t border-border text-center text-xs text-muted-foreground">
                <p>{format!("© {OWNER_NAME}")}</p>
                <p class="mt-1">{format!("Built {BUILD_TIME}")}</p>
            </footer>
        </section>
    }
}
