use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::storage;

pub const THEME_STORAGE_KEY: &str = "cortex-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Stored choice first, then the OS preference, then dark.
pub fn initial_theme(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    stored
        .and_then(Theme::parse)
        .or_else(|| prefers_dark.map(|dark| if dark { Theme::Dark } else { Theme::Light }))
        .unwrap_or(Theme::Dark)
}

fn system_prefers_dark() -> Option<bool> {
    window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
}

fn apply_to_document(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let (stale, current) = document_classes(theme);
    storage::report(classes.remove_1(stale), &format!("drop the {} theme class", stale));
    storage::report(classes.add_1(current), &format!("apply the {} theme class", current));
}

/// The root class to drop and the one to add for `theme`.
fn document_classes(theme: Theme) -> (&'static str, &'static str) {
    (theme.toggled().as_str(), theme.as_str())
}

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    theme: UseStateHandle<Theme>,
}

impl ThemeHandle {
    pub fn theme(&self) -> Theme {
        *self.theme
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle(&self) {
        self.set(self.theme().toggled());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| {
        initial_theme(
            storage::get_item(THEME_STORAGE_KEY).as_deref(),
            system_prefers_dark(),
        )
    });

    use_effect_with_deps(
        |theme| {
            debug!("Applying {} theme", theme.as_str());
            apply_to_document(*theme);
            storage::set_item(THEME_STORAGE_KEY, theme.as_str());
            || ()
        },
        *theme,
    );

    html! {
        <ContextProvider<ThemeHandle> context={ThemeHandle { theme }}>
            { for props.children.iter() }
        </ContextProvider<ThemeHandle>>
    }
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().expect("use_theme called outside of ThemeProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_wins() {
        assert_eq!(initial_theme(Some("light"), Some(true)), Theme::Light);
    }

    #[test]
    fn falls_back_to_system_then_dark() {
        assert_eq!(initial_theme(None, Some(false)), Theme::Light);
        assert_eq!(initial_theme(Some("sepia"), Some(true)), Theme::Dark);
        assert_eq!(initial_theme(None, None), Theme::Dark);
    }

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn document_swaps_the_opposite_class() {
        assert_eq!(document_classes(Theme::Dark), ("light", "dark"));
        assert_eq!(document_classes(Theme::Light), ("dark", "light"));
    }
}
