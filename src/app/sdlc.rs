use leptos::prelude::*;

use super::reveal::{Entrance, Reveal};
use crate::{
    content::{SdlcPhase, CULTURE_HIGHLIGHTS, PRINCIPLES, SDLC_PHASES},
    sections::SectionId,
};

#[component]
pub fn SdlcSection() -> impl IntoView {
    view! {
        <section id=SectionId::Sdlc.as_str() class="section-padding bg-muted/30">
            <div class="container-custom">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl lg:text-5xl font-bold mb-6 text-gradient">
                        "Engineering Mindset & SDLC"
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Demonstrating comprehensive understanding of software development lifecycle and engineering best practices"
                    </p>
                </Reveal>

                <div class="relative mb-20">
                    // timeline line grows from the left
                    <Reveal
                        entrance=Entrance::Fade
                        class="absolute top-8 left-0 w-full h-1 bg-gradient-primary rounded-full origin-left timeline-line"
                    >
                        ""
                    </Reveal>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-6 gap-8">
                        {SDLC_PHASES
                            .iter()
                            .enumerate()
                            .map(|(i, phase)| {
                                let delay_ms = 100 * i as u32;
                                view! {
                                    <Reveal delay_ms=delay_ms class="relative">
                                        <PhaseCard phase=*phase />
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Reveal>
                    <h3 class="text-3xl font-bold text-center mb-12 text-gradient-secondary">
                        "FAANGM Engineering Principles"
                    </h3>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {PRINCIPLES
                        .iter()
                        .enumerate()
                        .map(|(i, principle)| {
                            let delay_ms = 100 * i as u32;
                            view! {
                                <Reveal delay_ms=delay_ms class="card-premium text-center group hover-lift">
                                    <div class="p-4 rounded-xl bg-gradient-to-r from-primary/20 to-secondary/20 mb-4 mx-auto w-fit">
                                        <i class=format!("{} text-3xl text-primary", principle.icon) />
                                    </div>
                                    <h4 class="text-lg font-semibold mb-3">{principle.title}</h4>
                                    <p class="text-sm text-muted-foreground leading-relaxed">
                                        {principle.description}
                                    </p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal
                    entrance=Entrance::Scale
                    class="mt-16 p-8 rounded-2xl bg-gradient-to-r from-primary/5 to-secondary/5 border border-border"
                >
                    <h3 class="text-2xl font-bold text-center mb-8">"Cultural Fit Highlights"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {CULTURE_HIGHLIGHTS
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="text-center p-4 hover-grow">
                                        <div class="text-4xl mb-3">{item.emoji}</div>
                                        <h4 class="text-lg font-semibold mb-2">{item.title}</h4>
                                        <p class="text-sm text-muted-foreground leading-relaxed">
                                            {item.description}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn PhaseCard(phase: SdlcPhase) -> impl IntoView {
    view! {
        <div class=format!(
            "absolute -top-4 left-1/2 -translate-x-1/2 w-8 h-8 rounded-full bg-gradient-to-r {} border-4 border-background shadow-lg z-10 hover-pop",
            phase.color,
        ) />
        <div class="card-premium relative mt-8 group cursor-pointer">
            <div class=format!("p-4 rounded-xl bg-gradient-to-r {} mb-4 text-center", phase.color)>
                <i class=format!("{} text-3xl text-white", phase.icon) />
            </div>
            <h3 class="text-lg font-bold mb-3 text-center">{phase.title}</h3>
            <p class="text-sm text-muted-foreground mb-4 text-center leading-relaxed">
                {phase.description}
            </p>
            <div class="space-y-2">
                {phase
                    .practices
                    .iter()
                    .map(|practice| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <i class="extra-check-circle text-xs text-accent flex-shrink-0" />
                                <span class="text-xs text-foreground">{*practice}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class=format!(
                "absolute inset-0 rounded-2xl bg-gradient-to-r {} opacity-0 group-hover:opacity-10 transition-opacity duration-300 pointer-events-none",
                phase.color,
            ) />
        </div>
    }
}
