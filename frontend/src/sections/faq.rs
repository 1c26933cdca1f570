use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::content::hooks::use_content;
use crate::content::model::Faq;
use crate::reveal::{Align, Preset, ScrollReveal, SectionHeader, StaggerContainer, StaggerItem};

/// Single-open accordion: clicking the open item closes it, clicking another
/// one moves the selection.
pub fn toggle_open(open: Option<&str>, clicked: &str) -> Option<String> {
    match open {
        Some(current) if current == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    faq: Faq,
    open: bool,
    on_toggle: Callback<String>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = props.faq.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.clone());
        })
    };

    html! {
        <div class={classes!("card", "faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" {onclick} aria-expanded={props.open.to_string()}>
                <span>{&props.faq.question}</span>
                <Icon name={IconName::ChevronDown} class={classes!("faq-chevron", props.open.then(|| "flipped"))} />
            </button>
            if props.open {
                <div class="faq-answer">{&props.faq.answer}</div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let faqs = use_content::<Vec<Faq>>();
    let open = use_state(|| None::<String>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |id: String| open.set(toggle_open(open.as_deref(), &id)))
    };

    html! {
        <section class="section">
            <style>
            {r#"
                .faq-list { max-width: 48rem; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
                .faq-item { padding: 0 1.5rem; border-radius: 12px; transition: border-color 0.2s ease, transform 0.2s ease; }
                .faq-item:hover { transform: translateX(4px); }
                .faq-item.open { border-color: rgba(59, 130, 246, 0.3); }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: var(--foreground);
                    font-size: 1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-question:hover { color: var(--primary); }
                .faq-chevron { flex-shrink: 0; transition: transform 0.2s ease; }
                .faq-chevron.flipped { transform: rotate(180deg); }
                .faq-answer { color: var(--muted-foreground); padding-bottom: 1.25rem; line-height: 1.6; animation: page-in 0.3s ease-out; }
            "#}
            </style>
            <div class="container">
                <SectionHeader
                    badge="FAQ"
                    title="Frequently Asked"
                    highlight="Questions"
                    description="Got questions? We've got answers. If you can't find what you're looking for, reach out to our team."
                    align={Align::Center}
                />
                <ScrollReveal delay={0.2}>
                    <StaggerContainer class="faq-list" stagger={0.08}>
                        { for faqs.into_iter().map(|faq| {
                            let is_open = open.as_deref() == Some(faq.id.as_str());
                            html_nested! {
                                <StaggerItem key={faq.id.clone()} preset={Preset::SlideRight}>
                                    <FaqItem faq={faq.clone()} open={is_open} on_toggle={on_toggle.clone()} />
                                </StaggerItem>
                            }
                        }) }
                    </StaggerContainer>
                </ScrollReveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_opens_and_reclicking_closes() {
        let opened = toggle_open(None, "1");
        assert_eq!(opened.as_deref(), Some("1"));
        assert_eq!(toggle_open(opened.as_deref(), "1"), None);
    }

    #[test]
    fn at_most_one_item_is_open() {
        let opened = toggle_open(Some("1"), "2");
        assert_eq!(opened.as_deref(), Some("2"));
    }
}
