use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::config;
use crate::lease::checkout::{open_hosted_checkout, WidgetHandle};
use crate::lease::client::HttpLeaseApi;
use crate::lease::error::{StartError, ValidationError};
use crate::lease::identity::{bootstrap_identity, BrowserStorage};
use crate::lease::session::{LeaseSession, SharedSession};
use crate::lease::workflow::{submit_analysis, submit_checkout, submit_quick_clause};
use crate::pages::analyzer::{analyzer_section, AnalyzerView, EMAIL_INPUT_ID};
use crate::pages::demo::{demo_section, DemoView};
use crate::pages::faq::Faq;
use crate::pages::marketing;
use crate::pages::pricing::{pricing_section, PricingView};
use crate::utils::scroll::{focus_input, scroll_to_section, scroll_to_top, PendingScroll, Section};

#[function_component(Home)]
pub fn home() -> Html {
    let session: SharedSession =
        (*use_state(|| LeaseSession::shared(bootstrap_identity(BrowserStorage::local())))).clone();
    let refresh = use_force_update();
    let widget = use_context::<WidgetHandle>();
    let pending_scroll = use_context::<PendingScroll>();

    let selected_file = use_state(|| None::<File>);
    let clause_text = use_state(String::new);
    let email = use_state(String::new);
    let pricing_error = use_state(|| None::<String>);

    // Runs after the sections exist in the DOM.
    use_effect_with_deps(
        move |_| {
            let target = pending_scroll
                .as_ref()
                .and_then(|pending| pending.take())
                .or_else(section_from_location_hash);
            match target {
                Some(section) => {
                    scroll_to_section(section);
                }
                None => scroll_to_top(),
            }
            || ()
        },
        (),
    );

    let on_scroll = Callback::from(|section: Section| {
        scroll_to_section(section);
    });

    let on_file_change = {
        let selected_file = selected_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            selected_file.set(input.files().and_then(|files| files.get(0)));
        })
    };

    let on_analyze = {
        let session = session.clone();
        let refresh = refresh.clone();
        let selected_file = selected_file.clone();
        Callback::from(move |_: MouseEvent| {
            let request = submit_analysis(
                Rc::new(HttpLeaseApi),
                session.clone(),
                (*selected_file).clone(),
            );
            refresh.force_update();
            if let Ok(request) = request {
                let refresh = refresh.clone();
                spawn_local(async move {
                    request.await;
                    refresh.force_update();
                });
            }
        })
    };

    let on_clause_input = {
        let clause_text = clause_text.clone();
        Callback::from(move |text: String| clause_text.set(text))
    };

    let on_quick_analyze = {
        let session = session.clone();
        let refresh = refresh.clone();
        let clause_text = clause_text.clone();
        Callback::from(move |_: MouseEvent| {
            let request = submit_quick_clause(
                Rc::new(HttpLeaseApi),
                session.clone(),
                (*clause_text).clone(),
            );
            refresh.force_update();
            if let Ok(request) = request {
                let refresh = refresh.clone();
                spawn_local(async move {
                    request.await;
                    refresh.force_update();
                });
            }
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let on_unlock = {
        let session = session.clone();
        let refresh = refresh.clone();
        let email = email.clone();
        Callback::from(move |_: MouseEvent| {
            let request = submit_checkout(Rc::new(HttpLeaseApi), session.clone(), &email);
            refresh.force_update();
            match request {
                Ok(request) => {
                    let session = session.clone();
                    let refresh = refresh.clone();
                    spawn_local(async move {
                        if let Some(url) = request.await {
                            redirect_to_checkout(&url, &session);
                        }
                        refresh.force_update();
                    });
                }
                Err(StartError::Invalid(ValidationError::MissingEmail)) => {
                    focus_input(EMAIL_INPUT_ID);
                }
                Err(_) => {}
            }
        })
    };

    let on_hosted_checkout = {
        let pricing_error = pricing_error.clone();
        Callback::from(move |_: MouseEvent| {
            match open_hosted_checkout(widget.as_ref(), config::paddle_price_id()) {
                Ok(()) => pricing_error.set(None),
                Err(e) => {
                    log::warn!("Hosted checkout unavailable: {}", e);
                    pricing_error.set(Some(e.to_string()));
                }
            }
        })
    };

    let session = session.borrow();
    let file_name = (*selected_file).as_ref().map(|file| file.name());

    let analyzer = analyzer_section(AnalyzerView {
        file_name: file_name.as_deref(),
        analysis: session.analysis(),
        gate: session.gate(),
        checkout: session.checkout(),
        email: email.as_str(),
        on_file_change,
        on_analyze,
        on_email_input,
        on_unlock,
    });
    let demo = demo_section(DemoView {
        text: clause_text.as_str(),
        flow: session.quick_clause(),
        on_input: on_clause_input,
        on_submit: on_quick_analyze,
        on_scroll: on_scroll.clone(),
    });
    let pricing = pricing_section(PricingView {
        has_full_access: session.has_full_access(),
        analysis_id: session.analysis_id(),
        error: (*pricing_error).as_deref(),
        on_checkout: on_hosted_checkout,
    });

    html! {
        <div class="home">
            { marketing::hero(&on_scroll) }
            { marketing::stats() }
            { analyzer }
            { marketing::how_it_works(&on_scroll) }
            { marketing::comparison(&on_scroll) }
            { demo }
            { pricing }
            <Faq />
            { marketing::reviews() }
            { marketing::contact() }
        </div>
    }
}

fn section_from_location_hash() -> Option<Section> {
    let hash = web_sys::window()?.location().hash().ok()?;
    Section::from_hash(&hash)
}

fn redirect_to_checkout(url: &str, session: &SharedSession) {
    let result = web_sys::window()
        .ok_or_else(|| "no window".to_string())
        .and_then(|window| {
            window
                .location()
                .set_href(url)
                .map_err(|e| format!("{:?}", e))
        });
    if let Err(e) = result {
        log::error!("Failed to open checkout page: {}", e);
        session
            .borrow_mut()
            .checkout_redirect_failed("Failed to initialize payment");
    }
}
