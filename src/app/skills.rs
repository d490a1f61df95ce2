use leptos::{html, prelude::*};

use super::reveal::{use_entrance, Entrance, Reveal};
use crate::{
    content::{Skill, SkillCategory, SKILL_CATEGORIES, SPECIALTIES},
    sections::SectionId,
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="section-padding bg-muted/30">
            <div class="container-custom">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl lg:text-5xl font-bold mb-6 text-gradient">
                        "Technical Skills"
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Proficient in modern technologies and engineering practices that drive scalable solutions"
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            let delay_ms = 100 * i as u32;
                            view! {
                                <Reveal entrance=Entrance::Scale delay_ms=delay_ms>
                                    <CategoryCard category=*category />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal
                    delay_ms=300
                    class="mt-16 grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-4"
                >
                    {SPECIALTIES
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="p-4 rounded-xl bg-card/50 backdrop-blur-sm border border-border hover:border-primary/50 transition-all duration-300 text-center group hover-lift">
                                    <i class=format!(
                                        "{} {} text-3xl block mx-auto mb-2 group-hover:scale-110 transition-transform",
                                        item.icon,
                                        item.color,
                                    ) />
                                    <span class="text-sm font-medium text-muted-foreground group-hover:text-foreground transition-colors">
                                        {item.name}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="card-premium group hover-grow relative">
            <div class="flex items-center mb-6">
                <div class=format!("p-3 rounded-xl bg-gradient-to-r {} mr-4", category.color)>
                    <i class=format!("{} text-2xl text-white", category.icon) />
                </div>
                <h3 class="text-xl font-semibold">{category.title}</h3>
            </div>
            <div class="space-y-4">
                {category
                    .skills
                    .iter()
                    .map(|skill| view! { <SkillBar skill=*skill color=category.color /> })
                    .collect_view()}
            </div>
            <div class="absolute inset-0 rounded-2xl bg-gradient-to-r from-primary/5 to-secondary/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none" />
        </div>
    }
}

/// Level bar that fills to its percentage the first time it scrolls into view.
#[component]
fn SkillBar(skill: Skill, color: &'static str) -> impl IntoView {
    let track = NodeRef::<html::Div>::new();
    let entered = use_entrance(track);
    let level = skill.level;

    view! {
        <div class="space-y-2">
            <div class="flex justify-between items-center">
                <span class="text-sm font-medium text-foreground">{skill.name}</span>
                <span class="text-sm text-muted-foreground">{format!("{level}%")}</span>
            </div>
            <div node_ref=track class="h-2 bg-muted rounded-full overflow-hidden">
                <div
                    class=format!("h-full bg-gradient-to-r {color} rounded-full skill-fill")
                    style:width=move || {
                        if entered.get() { format!("{level}%") } else { "0%".to_string() }
                    }
                />
            </div>
        </div>
    }
}
