use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Icons the site can draw. Content documents name icons by string; anything
/// unrecognised decodes to `Unknown` and renders as a plain dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconName {
    Zap,
    Shield,
    BarChart3,
    Workflow,
    Users,
    Globe,
    Twitter,
    Linkedin,
    Github,
    Mail,
    Phone,
    MapPin,
    Sun,
    Moon,
    Menu,
    X,
    ArrowRight,
    ArrowUp,
    ArrowUpRight,
    ArrowDownRight,
    ChevronRight,
    ChevronDown,
    Star,
    Quote,
    Check,
    Sparkles,
    Play,
    Plus,
    LayoutDashboard,
    FolderKanban,
    Settings,
    LogOut,
    DollarSign,
    TrendingUp,
    Bell,
    User,
    ExternalLink,
    MoreHorizontal,
    #[serde(other)]
    Unknown,
}

impl IconName {
    /// SVG path data on a 24x24 grid.
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconName::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            IconName::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            IconName::BarChart3 => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            IconName::Workflow => &[
                "M3 3h6v6H3z",
                "M15 15h6v6h-6z",
                "M6 9v3a2 2 0 0 0 2 2h7",
            ],
            IconName::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconName::Globe => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            IconName::Twitter => &["M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"],
            IconName::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            IconName::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            IconName::Mail => &["M4 4h16v16H4z", "m22 6-10 7L2 6"],
            IconName::Phone => &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"],
            IconName::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
            ],
            IconName::Sun => &[
                "M12 8a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "M12 2v2", "M12 20v2", "m4.93 4.93 1.41 1.41", "m17.66 17.66 1.41 1.41",
                "M2 12h2", "M20 12h2", "m6.34 17.66-1.41 1.41", "m19.07 4.93-1.41 1.41",
            ],
            IconName::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            IconName::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconName::X => &["M18 6 6 18", "m6 6 12 12"],
            IconName::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconName::ArrowUp => &["m5 12 7-7 7 7", "M12 19V5"],
            IconName::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            IconName::ArrowDownRight => &["m7 7 10 10", "M17 7v10H7"],
            IconName::ChevronRight => &["m9 18 6-6-6-6"],
            IconName::ChevronDown => &["m6 9 6 6 6-6"],
            IconName::Star => &["m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"],
            IconName::Quote => &[
                "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2H4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .01-1 1.03V20c0 1 0 1 1 1z",
                "M15 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2h-4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
            ],
            IconName::Check => &["M20 6 9 17l-5-5"],
            IconName::Sparkles => &[
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
            ],
            IconName::Play => &["m6 3 14 9-14 9V3z"],
            IconName::Plus => &["M5 12h14", "M12 5v14"],
            IconName::LayoutDashboard => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
            IconName::FolderKanban => &[
                "M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.93a2 2 0 0 1-1.66-.9l-.82-1.2A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13c0 1.1.9 2 2 2Z",
                "M8 10v4", "M12 10v2", "M16 10v6",
            ],
            IconName::Settings => &[
                "M12 9a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
                "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
            ],
            IconName::LogOut => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5", "M21 12H9"],
            IconName::DollarSign => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            IconName::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            IconName::Bell => &["M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9", "M10.3 21a1.94 1.94 0 0 0 3.4 0"],
            IconName::User => &["M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z"],
            IconName::ExternalLink => &["M15 3h6v6", "M10 14 21 3", "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"],
            IconName::MoreHorizontal => &["M11 12h2", "M18 12h2", "M4 12h2"],
            IconName::Unknown => &["M12 9a3 3 0 1 0 0 6 3 3 0 1 0 0-6z"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.name.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_decode_from_content_strings() {
        let icons: Vec<IconName> = serde_json::from_str(r#"["Zap", "BarChart3", "Github"]"#).unwrap();
        assert_eq!(icons, vec![IconName::Zap, IconName::BarChart3, IconName::Github]);
    }

    #[test]
    fn unrecognised_icon_is_unknown() {
        let icon: IconName = serde_json::from_str(r#""Rocket""#).unwrap();
        assert_eq!(icon, IconName::Unknown);
        assert!(!icon.paths().is_empty());
    }
}
