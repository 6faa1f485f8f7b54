use leptos::prelude::*;

use super::ui::{Badge, Card};
use crate::content::{
    skill_categories, skills_in, Project, Skill, ABOUT_PARAGRAPHS, CONTACT_DESCRIPTION, PROJECTS,
    SOCIAL_LINKS, STATS,
};
use crate::menu::Section;
use crate::style::{button_class, cn, level_width, BadgeVariant, ButtonSize, ButtonVariant};

#[component]
fn SectionTitle(accent: &'static str, rest: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="section-title text-4xl font-bold mb-4">
                <span class="section-title-accent">{accent}</span>
                " "
                {rest}
            </h2>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 px-4 about-section">
            <div class="max-w-6xl mx-auto">
                <SectionTitle accent="About" rest="Me" />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        {ABOUT_PARAGRAPHS
                            .into_iter()
                            .map(|p| view! { <p class="about-text text-lg leading-relaxed">{p}</p> })
                            .collect_view()}
                        <div class="grid grid-cols-3 gap-6">
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center">
                                            <div class="stat-icon mx-auto mb-2 text-2xl">
                                                <i class=stat.icon_class />
                                            </div>
                                            <div class="stat-value text-2xl font-bold">{stat.value}</div>
                                            <div class="stat-label text-sm">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="relative">
                        <div class="about-visual w-80 h-80 mx-auto rounded-full flex items-center justify-center">
                            <div class="about-visual-inner w-64 h-64 rounded-full flex items-center justify-center animate-spin-slow">
                                <i class="extra-code about-visual-icon text-8xl" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-4 skills-section">
            <div class="max-w-6xl mx-auto">
                <SectionTitle accent="Technical" rest="Skills" />
                <div class="space-y-12">
                    {skill_categories()
                        .into_iter()
                        .map(|category| {
                            view! {
                                <div>
                                    <h3 class="skills-category-title text-xl font-semibold mb-6">
                                        {category}
                                    </h3>
                                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                        {skills_in(category)
                                            .map(|skill| view! { <SkillCard skill=*skill /> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="skill-card p-4 rounded-lg transition-transform hover:scale-105">
            <div class="flex justify-between items-center mb-2">
                <span class="skill-name font-medium">{skill.name}</span>
                <Badge variant=BadgeVariant::Secondary>{format!("{}%", skill.level)}</Badge>
            </div>
            <div class="skill-progress-bg w-full h-2 rounded-full">
                <div
                    class="skill-progress-fill h-full rounded-full transition-all duration-1000"
                    style=level_width(skill.level)
                />
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-4 projects-section">
            <div class="max-w-6xl mx-auto">
                <SectionTitle accent="Featured" rest="Projects" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    // featured projects take two columns on wide screens
    let wrapper = cn(&[
        "transition-transform duration-200 hover:-translate-y-2",
        if project.featured { "lg:col-span-2" } else { "" },
    ]);
    view! {
        <div class=wrapper>
            <Card class="project-card h-full group">
                <div class="p-6">
                    <div class="flex justify-between items-start mb-4">
                        <h3 class="project-title text-xl font-semibold group-hover:text-accent transition-colors">
                            {project.title}
                        </h3>
                        {project.featured.then(|| view! { <Badge>"Featured"</Badge> })}
                    </div>
                    <p class="project-description mb-4">{project.description}</p>
                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .tech
                            .iter()
                            .map(|tech| view! { <Badge variant=BadgeVariant::Outline>{*tech}</Badge> })
                            .collect_view()}
                    </div>
                    <div class="flex space-x-4">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class=button_class(ButtonVariant::Ghost, ButtonSize::Sm, "")
                        >
                            <i class="devicon-github-plain mr-2" />
                            "Code"
                        </a>
                        {project
                            .live
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class=button_class(ButtonVariant::Ghost, ButtonSize::Sm, "")
                                    >
                                        <i class="extra-link mr-2" />
                                        "Live Demo"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </Card>
        </div>
    }
}

/// Row of outbound social links. Hrefs are used exactly as configured.
#[component]
pub fn SocialLinks(#[prop(optional)] with_labels: bool) -> impl IntoView {
    SOCIAL_LINKS
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    aria-label=link.label
                    class="contact-social-link flex items-center space-x-3 transition-all hover:scale-110"
                >
                    <i class=cn(&[link.kind.icon_class(), "text-2xl"]) />
                    {with_labels.then(|| view! { <span>{link.label}</span> })}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Contact() -> impl IntoView {
    let email = SOCIAL_LINKS
        .iter()
        .find(|l| l.href.starts_with("mailto:"))
        .map(|l| l.href)
        .unwrap_or_default();
    view! {
        <section id=Section::Contact.id() class="py-20 px-4 contact-section">
            <div class="max-w-4xl mx-auto text-center">
                <SectionTitle accent="Let's" rest="Connect" />
                <p class="contact-description text-xl mb-12 max-w-2xl mx-auto">
                    {CONTACT_DESCRIPTION}
                </p>
                <div class="flex justify-center space-x-8 mb-12">
                    <SocialLinks with_labels=true />
                </div>
                <a href=email class=button_class(ButtonVariant::Default, ButtonSize::Lg, "")>
                    <i class="extra-email mr-2" />
                    "Start a Conversation"
                </a>
            </div>
        </section>
    }
}
