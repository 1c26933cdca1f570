use yew::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::icon::{Icon, IconName};
use crate::pages::dashboard::enter_style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    InReview,
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::InReview => "In Review",
            ProjectStatus::Completed => "Completed",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "status-progress",
            ProjectStatus::InReview => "status-review",
            ProjectStatus::Completed => "status-done",
        }
    }
}

struct TrackedProject {
    name: &'static str,
    status: ProjectStatus,
    progress: u8,
    team: u8,
    due: &'static str,
}

const PROJECTS: [TrackedProject; 4] = [
    TrackedProject { name: "E-Commerce Platform", status: ProjectStatus::InProgress, progress: 65, team: 4, due: "Feb 15, 2026" },
    TrackedProject { name: "Mobile Application", status: ProjectStatus::InReview, progress: 90, team: 3, due: "Feb 10, 2026" },
    TrackedProject { name: "Dashboard Redesign", status: ProjectStatus::Completed, progress: 100, team: 2, due: "Jan 28, 2026" },
    TrackedProject { name: "API Integration", status: ProjectStatus::InProgress, progress: 40, team: 5, due: "Feb 28, 2026" },
];

#[function_component(DashboardProjects)]
pub fn dashboard_projects() -> Html {
    html! {
        <DashboardLayout>
            <style>
            {r#"
                .projects-page { display: flex; flex-direction: column; gap: 1.5rem; }
                .projects-page-head { display: flex; justify-content: space-between; align-items: center; }
                .projects-page-head h1 { font-size: 1.5rem; font-weight: 700; margin: 0 0 0.25rem; }
                .projects-page-head p { margin: 0; }
                .projects-table-wrap { overflow-x: auto; }
                .projects-table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
                .projects-table th { text-align: left; padding: 1rem 1.5rem; color: var(--muted-foreground); font-weight: 500; border-bottom: 1px solid var(--border); }
                .projects-table td { padding: 1rem 1.5rem; border-bottom: 1px solid var(--border); }
                .projects-table tr:last-child td { border-bottom: none; }
                .projects-table tbody tr:hover { background: var(--muted); }
                .status { display: inline-block; padding: 0.125rem 0.625rem; border-radius: 999px; border: 1px solid; font-size: 0.75rem; font-weight: 500; }
                .status-progress { color: #3b82f6; background: rgba(59, 130, 246, 0.1); border-color: rgba(59, 130, 246, 0.2); }
                .status-review { color: #eab308; background: rgba(234, 179, 8, 0.1); border-color: rgba(234, 179, 8, 0.2); }
                .status-done { color: #22c55e; background: rgba(34, 197, 94, 0.1); border-color: rgba(34, 197, 94, 0.2); }
                .progress { display: flex; align-items: center; gap: 0.75rem; }
                .progress-track { width: 6rem; height: 0.5rem; border-radius: 999px; background: var(--muted); overflow: hidden; }
                .progress-fill { height: 100%; background: var(--primary); border-radius: 999px; }
            "#}
            </style>
            <div class="projects-page">
                <div class="projects-page-head" style={enter_style(0.0)}>
                    <div>
                        <h1>{"Projects"}</h1>
                        <p class="muted">{"Manage and track your projects"}</p>
                    </div>
                    <button class="btn btn-hero" type="button">
                        <Icon name={IconName::Plus} size={16} />{"New Project"}
                    </button>
                </div>

                <div class="card projects-table-wrap" style={enter_style(0.1)}>
                    <table class="projects-table">
                        <thead>
                            <tr>
                                <th>{"Project"}</th>
                                <th>{"Status"}</th>
                                <th>{"Progress"}</th>
                                <th>{"Team"}</th>
                                <th>{"Due Date"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for PROJECTS.iter().map(|project| html! {
                                <tr key={project.name}>
                                    <td><strong>{project.name}</strong></td>
                                    <td>
                                        <span class={classes!("status", project.status.class())}>{project.status.label()}</span>
                                    </td>
                                    <td>
                                        <div class="progress">
                                            <div class="progress-track">
                                                <div class="progress-fill" style={format!("width: {}%;", project.progress)}></div>
                                            </div>
                                            <span class="muted">{format!("{}%", project.progress)}</span>
                                        </div>
                                    </td>
                                    <td class="muted">{format!("{} members", project.team)}</td>
                                    <td class="muted">{project.due}</td>
                                    <td>
                                        <button class="btn btn-ghost btn-icon" type="button" aria-label="More">
                                            <Icon name={IconName::MoreHorizontal} size={16} />
                                        </button>
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_projects_are_marked_completed() {
        for project in PROJECTS.iter() {
            assert!(project.progress <= 100);
            assert_eq!(project.progress == 100, project.status == ProjectStatus::Completed, "{}", project.name);
        }
    }
}
