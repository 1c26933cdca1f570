use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::reveal::observer::use_in_view;
use crate::reveal::preset::{reveal_style, state_style, Preset, VisualState};
use crate::reveal::state::{counter_value, stagger_delays};

const COUNTER_FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub preset: Preset,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.6)]
    pub duration: f64,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or(0.2)]
    pub threshold: f64,
}

/// Reveals its children with `preset` the first time they scroll into view,
/// or every time when `once` is off.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.once, props.threshold);

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={reveal_style(props.preset, visible, props.duration, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StaggerItemProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub preset: Preset,
    #[prop_or(0.5)]
    pub duration: f64,
    /// Driven by the enclosing [`StaggerContainer`].
    #[prop_or_default]
    pub visible: bool,
    #[prop_or_default]
    pub delay: f64,
}

#[function_component(StaggerItem)]
pub fn stagger_item(props: &StaggerItemProps) -> Html {
    html! {
        <div
            class={props.class.clone()}
            style={reveal_style(props.preset, props.visible, props.duration, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerContainerProps {
    #[prop_or_default]
    pub children: ChildrenWithProps<StaggerItem>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.1)]
    pub stagger: f64,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or(0.1)]
    pub threshold: f64,
}

/// Watches itself and hands each [`StaggerItem`] child the shared visibility
/// plus a delay that grows with the child's position.
#[function_component(StaggerContainer)]
pub fn stagger_container(props: &StaggerContainerProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.once, props.threshold);
    let delays = stagger_delays(props.children.len(), 0.0, props.stagger);

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().zip(delays).map(|(mut item, delay)| {
                let item_props = Rc::make_mut(&mut item.props);
                item_props.visible = visible;
                item_props.delay = delay;
                item
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub highlight_words: Vec<String>,
    #[prop_or_else(|| AttrValue::from("text-gradient"))]
    pub highlight_class: AttrValue,
}

/// Word-by-word reveal for headings.
#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), true, 0.5);
    let hidden = VisualState { opacity: 0.0, y: 20.0, blur: 4.0, ..VisualState::SHOWN };
    let state = if visible { VisualState::SHOWN } else { hidden };
    let delays = stagger_delays(props.text.split(' ').count(), props.delay, 0.05);

    html! {
        <span ref={node} class={classes!("text-reveal", props.class.clone())}>
            { for props.text.split(' ').zip(delays).map(|(word, delay)| {
                let highlighted = props.highlight_words.iter().any(|w| w == word);
                html! {
                    <span
                        class={classes!("text-reveal-word", highlighted.then(|| props.highlight_class.to_string()))}
                        style={state_style(state, 0.4, delay)}
                    >
                        {word}
                    </span>
                }
            }) }
        </span>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    fn class(self) -> &'static str {
        match self {
            Align::Left => "align-left",
            Align::Center => "align-center",
            Align::Right => "align-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub badge: Option<AttrValue>,
    #[prop_or_default]
    pub highlight: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub align: Align,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), true, 0.5);
    let rise = |offset: f64| if visible {
        VisualState::SHOWN
    } else {
        VisualState { opacity: 0.0, y: offset, ..VisualState::SHOWN }
    };

    html! {
        <div ref={node} class={classes!("section-header", props.align.class(), props.class.clone())}>
            if let Some(badge) = &props.badge {
                <span class="section-badge" style={state_style(rise(20.0), 0.5, 0.0)}>{badge}</span>
            }
            <h2 class="section-title" style={state_style(rise(30.0), 0.6, 0.1)}>
                {&props.title}{" "}
                if let Some(highlight) = &props.highlight {
                    <span class="text-gradient">{highlight}</span>
                }
            </h2>
            if let Some(description) = &props.description {
                <p class="section-description" style={state_style(rise(20.0), 0.5, 0.2)}>{description}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub to: f64,
    #[prop_or(0.0)]
    pub from: f64,
    #[prop_or(2.0)]
    pub duration: f64,
    #[prop_or(0)]
    pub decimals: usize,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts from `from` to `to` once scrolled into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), true, 0.5);
    let value = use_state_eq(|| props.from);

    {
        let value = value.clone();
        let (from, to, duration) = (props.from, props.to, props.duration);
        use_effect_with_deps(
            move |visible| {
                let mounted = Rc::new(Cell::new(true));
                if *visible {
                    let mounted = mounted.clone();
                    let frames = ((duration * 1000.0) / COUNTER_FRAME_MS as f64).ceil().max(1.0) as u32;
                    spawn_local(async move {
                        for frame in 1..=frames {
                            TimeoutFuture::new(COUNTER_FRAME_MS).await;
                            if !mounted.get() {
                                return;
                            }
                            value.set(counter_value(from, to, frame as f64 / frames as f64));
                        }
                    });
                }
                move || mounted.set(false)
            },
            visible,
        );
    }

    html! {
        <span ref={node} class={props.class.clone()}>
            { format!("{}{:.*}{}", props.prefix, props.decimals, *value, props.suffix) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_center_unless_told_otherwise() {
        assert_eq!(Align::default(), Align::Center);
        let classes: Vec<&str> = [Align::Left, Align::Center, Align::Right].into_iter().map(Align::class).collect();
        assert_eq!(classes, vec!["align-left", "align-center", "align-right"]);
    }
}
