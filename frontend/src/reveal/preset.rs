/// `cubic-bezier(0.25, 0.4, 0.25, 1)`, shared by every reveal transition.
pub const REVEAL_EASING: &str = "cubic-bezier(0.25, 0.4, 0.25, 1)";

/// The visual properties a reveal animates between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub blur: f64,
}

impl VisualState {
    pub const SHOWN: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        blur: 0.0,
    };

    const HIDDEN: VisualState = VisualState { opacity: 0.0, ..Self::SHOWN };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}) rotate({}deg); filter: blur({}px);",
            self.opacity, self.x, self.y, self.scale, self.rotate, self.blur
        )
    }
}

/// Named hidden/visible pairs. Being an enum, a misspelled preset is a
/// compile error rather than a silently missing animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    Fade,
    #[default]
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Scale,
    Blur,
    Rotate,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Fade,
        Preset::SlideUp,
        Preset::SlideDown,
        Preset::SlideLeft,
        Preset::SlideRight,
        Preset::Scale,
        Preset::Blur,
        Preset::Rotate,
    ];

    pub fn hidden(self) -> VisualState {
        let hidden = VisualState::HIDDEN;
        match self {
            Preset::Fade => hidden,
            Preset::SlideUp => VisualState { y: 60.0, ..hidden },
            Preset::SlideDown => VisualState { y: -60.0, ..hidden },
            Preset::SlideLeft => VisualState { x: 60.0, ..hidden },
            Preset::SlideRight => VisualState { x: -60.0, ..hidden },
            Preset::Scale => VisualState { scale: 0.8, ..hidden },
            Preset::Blur => VisualState { blur: 10.0, ..hidden },
            Preset::Rotate => VisualState { rotate: -10.0, scale: 0.9, ..hidden },
        }
    }

    pub fn visible(self) -> VisualState {
        VisualState::SHOWN
    }

    pub fn state(self, visible: bool) -> VisualState {
        if visible {
            self.visible()
        } else {
            self.hidden()
        }
    }
}

/// Inline style for an element driven by `preset`, transitioning over
/// `duration` seconds after `delay` seconds.
pub fn reveal_style(preset: Preset, visible: bool, duration: f64, delay: f64) -> String {
    state_style(preset.state(visible), duration, delay)
}

pub fn state_style(state: VisualState, duration: f64, delay: f64) -> String {
    let transition = ["opacity", "transform", "filter"]
        .iter()
        .map(|prop| format!("{} {}s {} {}s", prop, duration, REVEAL_EASING, delay))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} transition: {}; will-change: opacity, transform;",
        state.css(),
        transition
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_fades_in_to_rest() {
        for preset in Preset::ALL {
            assert_eq!(preset.hidden().opacity, 0.0, "{:?}", preset);
            assert_eq!(preset.visible(), VisualState::SHOWN, "{:?}", preset);
        }
    }

    #[test]
    fn slide_presets_offset_the_right_axis() {
        assert_eq!(Preset::SlideUp.hidden().y, 60.0);
        assert_eq!(Preset::SlideDown.hidden().y, -60.0);
        assert_eq!(Preset::SlideLeft.hidden().x, 60.0);
        assert_eq!(Preset::SlideRight.hidden().x, -60.0);
    }

    #[test]
    fn rotate_preset_also_shrinks() {
        let hidden = Preset::Rotate.hidden();
        assert_eq!(hidden.rotate, -10.0);
        assert_eq!(hidden.scale, 0.9);
    }

    #[test]
    fn style_carries_delay_and_duration() {
        let style = reveal_style(Preset::Blur, false, 0.6, 0.2);
        assert!(style.contains("filter: blur(10px)"));
        assert!(style.contains("opacity 0.6s cubic-bezier(0.25, 0.4, 0.25, 1) 0.2s"));
    }
}
