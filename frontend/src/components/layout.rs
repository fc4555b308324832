use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::lease::checkout::{open_hosted_checkout, WidgetHandle};
use crate::utils::scroll::{scroll_to_section, PendingScroll, Section};
use crate::Route;

/// How a section link behaves from the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    ScrollNow,
    NavigateHomeThenScroll,
}

pub fn nav_action(current: Option<&Route>) -> NavAction {
    match current {
        Some(Route::Home) => NavAction::ScrollNow,
        _ => NavAction::NavigateHomeThenScroll,
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let pending_scroll = use_context::<PendingScroll>();
    let widget = use_context::<WidgetHandle>();
    let payment_error = use_state(|| None::<String>);

    let go_to_section = {
        let route = route.clone();
        Callback::from(move |section: Section| match nav_action(route.as_ref()) {
            NavAction::ScrollNow => {
                scroll_to_section(section);
            }
            NavAction::NavigateHomeThenScroll => {
                if let Some(pending) = &pending_scroll {
                    pending.request(section);
                }
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
        })
    };

    let on_payment_click = {
        let payment_error = payment_error.clone();
        Callback::from(move |_: MouseEvent| {
            match open_hosted_checkout(widget.as_ref(), config::paddle_price_id()) {
                Ok(()) => payment_error.set(None),
                Err(e) => {
                    log::warn!("Hosted checkout unavailable: {}", e);
                    payment_error.set(Some(e.to_string()));
                }
            }
        })
    };

    let section_button = |section: Section, class: &'static str| {
        let go_to_section = go_to_section.clone();
        let onclick = Callback::from(move |_: MouseEvent| go_to_section.emit(section));
        html! {
            <button class={class} {onclick}>{section.nav_label()}</button>
        }
    };

    html! {
        <div class="site">
            <nav class="top-nav">
                <div class="nav-inner">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <i class="fas fa-microchip"></i>
                        <span>{"QiYoga Studio"}</span>
                    </Link<Route>>
                    <div class="nav-links">
                        { for Section::NAV.iter().map(|section| section_button(*section, "nav-link")) }
                        <button class="nav-cta" onclick={on_payment_click}>
                            {"Get My Lease Reviewed"}
                        </button>
                    </div>
                </div>
                {
                    if let Some(message) = (*payment_error).as_ref() {
                        html! { <div class="nav-error">{message}</div> }
                    } else {
                        html! {}
                    }
                }
            </nav>

            <main class="site-main">
                { for props.children.iter() }
            </main>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div class="footer-about">
                        <div class="footer-brand">
                            <i class="fas fa-microchip"></i>
                            <span>{"QiYoga Studio"}</span>
                        </div>
                        <p>{"Professional online lease consulting for U.S. tenants. We provide plain-English explanations of complex rental agreements."}</p>
                        <p class="footer-highlight">{format!("14-day refund policy. {}", config::SUPPORT_EMAIL)}</p>
                        <p class="footer-small">{"Digital consulting services only. No physical goods or in-person services."}</p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for Section::NAV.iter().map(|section| html! {
                                <li>{section_button(*section, "footer-link")}</li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Legal"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Terms} classes="footer-link">{"Terms of Service"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy Policy"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Refund} classes="footer-link">{"Refund Policy"}</Link<Route>></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 QiYoga Studio. All rights reserved."}</p>
                    <span><i class="fas fa-shield-alt"></i>{" Payments processed securely by Paddle."}</span>
                </div>
            </footer>
        </div>
    }
}
