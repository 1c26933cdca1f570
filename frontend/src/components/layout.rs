use yew::prelude::*;

use crate::components::floating_action_button::FloatingActionButton;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(true)]
    pub show_footer: bool,
}

/// Public page chrome: navbar, page body, footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="site-layout">
            <Navbar />
            <main class="site-main">
                { for props.children.iter() }
            </main>
            if props.show_footer {
                <Footer />
            }
            <FloatingActionButton />
        </div>
    }
}
