use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::components::navbar::NavLink;
use crate::content::hooks::use_content;
use crate::content::model::{ContactInfo, NavItem, SiteConfig};
use crate::reveal::{Preset, ScrollReveal};
use crate::Route;

const QUICK_LINK_COUNT: usize = 4;

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = use_content::<SiteConfig>();
    let nav_items = use_content::<Vec<NavItem>>();
    let contact = use_content::<ContactInfo>();
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
            {r#"
                .site-footer { background: var(--card); border-top: 1px solid var(--border); }
                .footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 3rem; padding: 4rem 0; }
                .footer-grid h4 { margin: 0 0 1rem; font-weight: 600; }
                .footer-links { display: flex; flex-direction: column; gap: 0.5rem; }
                .footer-links .nav-link { padding: 0; font-size: 0.875rem; }
                .footer-socials { display: flex; gap: 0.75rem; margin-top: 1rem; }
                .footer-socials a {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 8px;
                    background: var(--muted);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: var(--muted-foreground);
                    transition: all 0.2s ease;
                }
                .footer-socials a:hover { background: var(--primary); color: var(--primary-foreground); }
                .footer-contact { display: flex; flex-direction: column; gap: 0.75rem; font-size: 0.875rem; color: var(--muted-foreground); }
                .footer-contact span { display: flex; align-items: center; gap: 0.5rem; }
                .footer-bottom { border-top: 1px solid var(--border); padding: 1.5rem 0; font-size: 0.875rem; color: var(--muted-foreground); text-align: center; }
            "#}
            </style>
            <div class="container footer-grid">
                <ScrollReveal preset={Preset::SlideUp} duration={0.5}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="text-gradient">{&site.name}</span>
                    </Link<Route>>
                    <p class="muted">{&site.description}</p>
                    <div class="footer-socials">
                        { for contact.socials.iter().map(|social| html! {
                            <a key={social.platform.clone()} href={social.url.clone()} aria-label={social.platform.clone()}>
                                <Icon name={social.icon} />
                            </a>
                        }) }
                    </div>
                </ScrollReveal>

                <ScrollReveal preset={Preset::SlideUp} duration={0.5} delay={0.1}>
                    <h4>{"Quick Links"}</h4>
                    <nav class="footer-links">
                        { for nav_items.iter().take(QUICK_LINK_COUNT).map(|item| html! {
                            <NavLink key={item.id.clone()} item={item.clone()} active={false} />
                        }) }
                    </nav>
                </ScrollReveal>

                <ScrollReveal preset={Preset::SlideUp} duration={0.5} delay={0.2}>
                    <h4>{"Company"}</h4>
                    <nav class="footer-links">
                        { for nav_items.iter().skip(QUICK_LINK_COUNT).map(|item| html! {
                            <NavLink key={item.id.clone()} item={item.clone()} active={false} />
                        }) }
                    </nav>
                </ScrollReveal>

                <ScrollReveal preset={Preset::SlideUp} duration={0.5} delay={0.3}>
                    <h4>{"Contact"}</h4>
                    <div class="footer-contact">
                        <span><Icon name={IconName::Mail} size={16} />{&contact.email}</span>
                        <span><Icon name={IconName::Phone} size={16} />{&contact.phone}</span>
                        <span><Icon name={IconName::MapPin} size={16} />{&contact.address}</span>
                    </div>
                </ScrollReveal>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", year, site.name)}
            </div>
        </footer>
    }
}
