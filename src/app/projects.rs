use leptos::prelude::*;

use super::reveal::{Entrance, Reveal};
use crate::{
    content::{Project, GITHUB_PROFILE, MORE_PROJECTS, PROJECTS},
    sections::SectionId,
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="section-padding">
            <div class="container-custom">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl lg:text-5xl font-bold mb-6 text-gradient">
                        "Featured Projects"
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Showcasing scalable solutions that demonstrate technical depth, problem-solving, and engineering best practices"
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let delay_ms = 200 * i as u32;
                            view! {
                                <Reveal
                                    entrance=Entrance::Tilt
                                    delay_ms=delay_ms
                                    class="group perspective-1000"
                                >
                                    <ProjectCard project=*project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal delay_ms=300 class="mt-16 text-center">
                    <p class="text-muted-foreground mb-6">
                        "Want to see more? Check out my GitHub for additional projects including:"
                    </p>
                    <div class="flex flex-wrap justify-center gap-4 mb-8">
                        {MORE_PROJECTS
                            .iter()
                            .map(|name| {
                                view! {
                                    <span class="px-4 py-2 rounded-full bg-card border border-border text-sm font-medium hover:border-primary/50 transition-colors">
                                        {*name}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <a
                        href=GITHUB_PROFILE
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-ghost inline-flex items-center"
                    >
                        <i class="devicon-github-plain mr-2 text-xl" />
                        "View All Projects"
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="card-premium relative h-full flex flex-col transform-gpu transition-all duration-500 group-hover:rotate-y-2 group-hover:scale-105">
            <div class=format!("p-6 rounded-t-2xl {} border-b border-border", project.accent)>
                <div class="flex items-center justify-between mb-4">
                    <div class=format!("p-3 rounded-xl bg-gradient-to-r {}", project.color)>
                        <i class=format!("{} text-2xl text-white", project.icon) />
                    </div>
                    <div class="flex space-x-2">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 rounded-lg bg-background/80 hover:bg-background transition-colors hover-pop"
                        >
                            <i class="devicon-github-plain" />
                        </a>
                        <a
                            href=project.demo
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 rounded-lg bg-primary hover:bg-primary/90 transition-colors hover-pop"
                        >
                            <i class="extra-external-link text-primary-foreground" />
                        </a>
                    </div>
                </div>
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-sm text-muted-foreground leading-relaxed">{project.description}</p>
            </div>

            <div class="p-6 flex-1 flex flex-col">
                <div class="mb-4">
                    <h4 class="text-sm font-semibold mb-2 text-muted-foreground">"Tech Stack"</h4>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 text-xs font-medium rounded-full bg-muted text-muted-foreground border border-border">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="flex-1">
                    <h4 class="text-sm font-semibold mb-3 text-muted-foreground">"Key Features"</h4>
                    <ul class="space-y-2">
                        {project
                            .key_features()
                            .map(|feature| {
                                view! {
                                    <li class="flex items-start space-x-2 text-sm">
                                        <div class="w-1.5 h-1.5 bg-primary rounded-full mt-2 flex-shrink-0" />
                                        <span class="text-foreground">{feature}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="mt-6 flex space-x-3">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 btn-ghost btn-sm"
                    >
                        <i class="extra-code mr-2" />
                        "View Code"
                    </a>
                    <a
                        href=project.demo
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 btn-hero btn-sm"
                    >
                        <i class="extra-external-link mr-2" />
                        "Live Demo"
                    </a>
                </div>
            </div>

            <div class="absolute inset-0 rounded-2xl bg-gradient-to-r from-primary/5 to-secondary/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none" />
        </div>
    }
}
