use yew::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::icon::{Icon, IconName};
use crate::session::use_session;

#[derive(Clone, Copy, PartialEq)]
enum Trend {
    Up,
    Down,
}

struct Stat {
    label: &'static str,
    value: &'static str,
    change: &'static str,
    trend: Trend,
    icon: IconName,
}

const STATS: [Stat; 4] = [
    Stat { label: "Total Revenue", value: "$45,231", change: "+12.5%", trend: Trend::Up, icon: IconName::DollarSign },
    Stat { label: "Active Users", value: "2,350", change: "+8.2%", trend: Trend::Up, icon: IconName::Users },
    Stat { label: "Projects", value: "18", change: "+2", trend: Trend::Up, icon: IconName::FolderKanban },
    Stat { label: "Growth", value: "24.5%", change: "-2.4%", trend: Trend::Down, icon: IconName::TrendingUp },
];

const RECENT_ACTIVITY: [(&str, &str, &str); 4] = [
    ("New project created", "E-Commerce Platform", "2 hours ago"),
    ("User invited", "Dashboard Redesign", "4 hours ago"),
    ("Deployment completed", "Mobile App", "6 hours ago"),
    ("Issue resolved", "API Integration", "1 day ago"),
];

/// Inline entrance animation for dashboard panels.
pub fn enter_style(delay: f64) -> String {
    format!("animation: page-in 0.5s ease-out {:.2}s both;", delay)
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_session();
    let name = session.identity().map(|i| i.name.clone()).unwrap_or_default();

    html! {
        <DashboardLayout>
            <style>
            {r#"
                .dashboard-page { display: flex; flex-direction: column; gap: 1.5rem; }
                .dashboard-page h1 { font-size: 1.5rem; font-weight: 700; margin: 0 0 0.25rem; }
                .dashboard-page p { margin: 0; }
                .stat-card { padding: 1.5rem; }
                .stat-card-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
                .stat-icon { width: 2.5rem; height: 2.5rem; border-radius: 8px; background: rgba(59, 130, 246, 0.1); color: var(--primary); display: flex; align-items: center; justify-content: center; }
                .trend { display: flex; align-items: center; gap: 0.25rem; font-size: 0.875rem; font-weight: 500; }
                .trend.up { color: #22c55e; }
                .trend.down { color: #ef4444; }
                .stat-card h3 { font-size: 1.5rem; font-weight: 700; margin: 0; }
                .activity { padding: 1.5rem; }
                .activity h2 { font-size: 1.125rem; font-weight: 600; margin: 0 0 1rem; }
                .activity-row { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 0; border-bottom: 1px solid var(--border); }
                .activity-row:last-child { border-bottom: none; }
                .activity-row .action { font-weight: 500; }
                .activity-row .muted { font-size: 0.875rem; }
            "#}
            </style>
            <div class="dashboard-page">
                <div style={enter_style(0.0)}>
                    <h1>{format!("Welcome back, {}", name)}</h1>
                    <p class="muted">{"Here's what's happening with your projects today."}</p>
                </div>

                <div class="grid grid-4">
                    { for STATS.iter().enumerate().map(|(index, stat)| {
                        let (trend_class, trend_icon) = match stat.trend {
                            Trend::Up => ("up", IconName::ArrowUpRight),
                            Trend::Down => ("down", IconName::ArrowDownRight),
                        };
                        html! {
                            <div key={stat.label} class="card stat-card" style={enter_style(index as f64 * 0.1)}>
                                <div class="stat-card-head">
                                    <div class="stat-icon"><Icon name={stat.icon} /></div>
                                    <span class={classes!("trend", trend_class)}>
                                        {stat.change}<Icon name={trend_icon} size={16} />
                                    </span>
                                </div>
                                <h3>{stat.value}</h3>
                                <p class="muted">{stat.label}</p>
                            </div>
                        }
                    }) }
                </div>

                <div class="card activity" style={enter_style(0.4)}>
                    <h2>{"Recent Activity"}</h2>
                    { for RECENT_ACTIVITY.iter().map(|(action, project, time)| html! {
                        <div key={*action} class="activity-row">
                            <div>
                                <p class="action">{*action}</p>
                                <p class="muted">{*project}</p>
                            </div>
                            <span class="muted">{*time}</span>
                        </div>
                    }) }
                </div>
            </div>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_delay_is_rendered_in_seconds() {
        assert_eq!(enter_style(0.4), "animation: page-in 0.5s ease-out 0.40s both;");
    }
}
