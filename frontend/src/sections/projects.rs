use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::content::hooks::use_content;
use crate::content::model::Project;
use crate::reveal::{Align, ScrollReveal, SectionHeader};

pub const ALL_CATEGORIES: &str = "All";

/// "All" followed by each category in first-seen order.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        if !categories.contains(&project.category) {
            categories.push(project.category.clone());
        }
    }
    categories
}

pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    html! {
        <div class="card hoverable project-card">
            <div class="project-image">
                <img src={project.image.clone()} alt={project.title.clone()} />
                <div class="project-overlay">
                    <span><Icon name={IconName::ExternalLink} /></span>
                </div>
            </div>
            <div class="project-body">
                <span class="project-category">{&project.category}</span>
                <h3>{&project.title}</h3>
                <p class="muted">{&project.description}</p>
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! { <span key={tag.clone()}>{tag}</span> }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let projects = use_content::<Vec<Project>>();
    let active = use_state(|| ALL_CATEGORIES.to_string());

    html! {
        <section class="section sunken">
            <style>
            {r#"
                .project-filters { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem; margin-bottom: 3rem; }
                .project-filters button {
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    border: none;
                    background: var(--card);
                    color: var(--muted-foreground);
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .project-filters button:hover { color: var(--foreground); background: var(--muted); }
                .project-filters button.active { background: var(--primary); color: var(--primary-foreground); }
                .project-card { overflow: hidden; animation: project-in 0.4s ease-out; }
                @keyframes project-in {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                .project-image { position: relative; aspect-ratio: 16 / 9; overflow: hidden; }
                .project-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.6s ease-out; }
                .project-card:hover .project-image img { transform: scale(1.1); }
                .project-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(59, 130, 246, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .project-overlay span {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 999px;
                    background: var(--background);
                    color: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .project-card:hover .project-overlay { opacity: 1; }
                .project-body { padding: 1.5rem; }
                .project-category { color: var(--primary); font-size: 0.75rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.08em; }
                .project-body h3 { font-size: 1.125rem; font-weight: 600; margin: 0.5rem 0; }
                .project-body p { font-size: 0.875rem; margin: 0 0 1rem; }
                .project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                .project-tags span { font-size: 0.75rem; padding: 0.25rem 0.625rem; border-radius: 999px; background: var(--muted); color: var(--muted-foreground); }
            "#}
            </style>
            <div class="container">
                <SectionHeader
                    badge="Portfolio"
                    title="Recent"
                    highlight="Projects"
                    description="Explore our latest work across various industries and technologies."
                    align={Align::Center}
                />
                <ScrollReveal delay={0.2}>
                    <div class="project-filters">
                        { for categories(&projects).into_iter().map(|category| {
                            let onclick = {
                                let active = active.clone();
                                let category = category.clone();
                                Callback::from(move |_: MouseEvent| active.set(category.clone()))
                            };
                            html! {
                                <button key={category.clone()} class={classes!((*active == category).then(|| "active"))} {onclick}>
                                    {category}
                                </button>
                            }
                        }) }
                    </div>
                </ScrollReveal>
                <div class="grid grid-3">
                    { for filter_projects(&projects, &active).into_iter().map(|project| html! {
                        <ProjectCard key={project.id.clone()} project={project.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data;

    #[test]
    fn categories_start_with_all_and_are_distinct() {
        let categories = categories(&data::projects());
        assert_eq!(categories, vec!["All", "Web Development", "SaaS", "Enterprise", "AI/ML"]);
    }

    #[test]
    fn all_keeps_everything() {
        let projects = data::projects();
        assert_eq!(filter_projects(&projects, ALL_CATEGORIES).len(), projects.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let projects = data::projects();
        let enterprise = filter_projects(&projects, "Enterprise");
        assert_eq!(enterprise.len(), 2);
        assert!(enterprise.iter().all(|p| p.category == "Enterprise"));
        assert!(filter_projects(&projects, "Hardware").is_empty());
    }
}
