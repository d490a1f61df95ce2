use std::cell::RefCell;

use leptos::prelude::*;

use super::{
    nav::use_navigator,
    reveal::{Entrance, Reveal},
};
use crate::{
    content::{HERO_BACKGROUND, HERO_SUBTITLE, OWNER_NAME, SOCIAL_LINKS},
    sections::SectionId,
    timer::SharedTimer,
    typing::{TypingEffect, TypingStep, TAGLINE, TYPING_DELAY},
};

/// Text revealed so far by a typing effect started on mount.
///
/// The interval stops itself once the phrase is complete and is also cleared
/// if the view goes away first.
fn use_typing(source: &'static str) -> ReadSignal<&'static str> {
    let (text, set_text) = signal("");

    Effect::new(move |_| {
        let typing = RefCell::new(TypingEffect::new(source));
        let timer = SharedTimer::<IntervalHandle>::default();

        let handle = set_interval_with_handle(
            {
                let timer = timer.clone();
                move || match typing.borrow_mut().tick() {
                    TypingStep::Revealed(s) => set_text.set(s),
                    TypingStep::Finished => timer.clear(),
                }
            },
            TYPING_DELAY,
        );

        match handle {
            Ok(handle) => {
                timer.arm(handle);
                on_cleanup(move || timer.clear());
            }
            Err(e) => log::warn!("couldn't start typing effect: {e:?}"),
        }
    });

    text
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let nav = use_navigator();
    let tagline = use_typing(TAGLINE);

    view! {
        <section
            id=SectionId::Hero.as_str()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 z-0">
                <img
                    src=HERO_BACKGROUND
                    alt="Hero Background"
                    class="w-full h-full object-cover opacity-30"
                />
                <div class="absolute inset-0 bg-gradient-to-br from-background/90 via-background/60 to-background/90" />
            </div>

            <div class="absolute top-20 left-20 w-4 h-4 bg-primary rounded-full blur-sm animate-float" />
            <div class="absolute top-40 right-32 w-6 h-6 bg-secondary rounded-full blur-sm animate-float" />
            <div class="absolute bottom-32 left-40 w-3 h-3 bg-accent rounded-full blur-sm animate-float" />

            <div class="relative z-10 container-custom text-center section-padding">
                <div class="max-w-4xl mx-auto">
                    <Reveal delay_ms=0>
                        <h1 class="text-6xl lg:text-7xl font-bold mb-6 text-gradient">{OWNER_NAME}</h1>
                    </Reveal>
                    <Reveal delay_ms=200 class="mb-4 h-12 flex items-center justify-center">
                        <span class="text-xl lg:text-2xl font-medium text-muted-foreground font-mono">
                            {move || tagline.get()}
                            <span class="animate-blink border-r-2 border-primary ml-1" />
                        </span>
                    </Reveal>
                    <Reveal delay_ms=400>
                        <p class="text-lg lg:text-xl text-muted-foreground mb-12 max-w-2xl mx-auto leading-relaxed">
                            {HERO_SUBTITLE}
                        </p>
                    </Reveal>
                    <Reveal
                        delay_ms=600
                        class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-16"
                    >
                        <a href="/resume.pdf" download="resume.pdf" class="btn-hero group">
                            <i class="extra-download mr-2 group-hover:animate-bounce" />
                            "View Resume"
                        </a>
                        <button
                            class="btn-ghost group"
                            on:click=move |_| nav.go(SectionId::Contact)
                        >
                            <i class="extra-email mr-2 group-hover:scale-110 transition-transform" />
                            "Contact Me"
                        </button>
                    </Reveal>
                    <Reveal delay_ms=800 class="flex justify-center space-x-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-3 rounded-xl bg-card/50 backdrop-blur-sm border border-border hover:border-primary/50 transition-all duration-300 group hover-lift"
                                    >
                                        <i class=format!(
                                            "{} text-2xl text-muted-foreground group-hover:text-primary transition-colors",
                                            link.icon,
                                        ) />
                                        <span class="sr-only">{link.label}</span>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button
                            class="p-3 rounded-xl bg-card/50 backdrop-blur-sm border border-border hover:border-primary/50 transition-all duration-300 group hover-lift"
                            on:click=move |_| nav.go(SectionId::Projects)
                        >
                            <i class="extra-external-link text-2xl text-muted-foreground group-hover:text-primary transition-colors" />
                            <span class="sr-only">"Portfolio"</span>
                        </button>
                    </Reveal>
                </div>

                <Reveal
                    entrance=Entrance::Fade
                    delay_ms=1000
                    class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-drift"
                >
                    <div class="w-6 h-10 border-2 border-muted-foreground rounded-full flex justify-center">
                        <div class="w-1 h-3 bg-primary rounded-full mt-2 animate-bounce" />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
