use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::SUPPORT_EMAIL;
use crate::utils::scroll::{scroll_to_id, Section};

pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        id: "faq-data-security",
        question: "Is my lease data secure?",
        answer: "Absolutely. Your lease is processed securely and never shared with third parties. We use bank-level encryption (AES-256) and delete your document within 30 days after analysis. Your privacy is our top priority.",
    },
    FaqEntry {
        id: "faq-missed-issues",
        question: "What if AI misses something?",
        answer: "Our AI is trained on thousands of lease agreements and keeps improving. Use our analysis as a helpful guide, not a replacement for legal advice. If you find an error, email support and we'll review it manually at no extra cost.",
    },
    FaqEntry {
        id: "faq-refund",
        question: "Can I get a refund?",
        answer: "Yes. If you're not satisfied with the analysis for any reason, email us within 14 days of purchase for a full refund.",
    },
    FaqEntry {
        id: "faq-accuracy",
        question: "How accurate is analysis?",
        answer: "Our AI has been trained on 10,000+ residential lease agreements and reliably identifies problematic clauses. For complex commercial leases or unusual situations, we recommend consulting a lawyer.",
    },
    FaqEntry {
        id: "faq-data-sharing",
        question: "Do you share my data with landlords or brokers?",
        answer: "Never. Your lease analysis is 100% confidential. We don't sell, share, or monetize your data. We're on YOUR side as a tenant, not the landlord's.",
    },
];

/// Next open item after clicking `clicked`. Only one item is open at a time.
pub fn toggled(open: Option<&str>, clicked: &'static str) -> Option<&'static str> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// The entry a `#faq-...` URL hash points at.
pub fn entry_for_hash(hash: &str) -> Option<&'static str> {
    let id = hash.trim_start_matches('#');
    ENTRIES.iter().map(|entry| entry.id).find(|entry_id| *entry_id == id)
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    id: &'static str,
    is_open: bool,
    on_toggle: Callback<&'static str>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };
    html! {
        <div id={props.id} class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

fn current_hash() -> Option<String> {
    web_sys::window().and_then(|window| window.location().hash().ok())
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<&'static str>);

    // Open the item named in the URL hash, now and on later hash changes.
    {
        let open = open.clone();
        use_effect_with_deps(
            move |_| {
                let open_from_hash = move || {
                    if let Some(id) = current_hash().as_deref().and_then(entry_for_hash) {
                        open.set(Some(id));
                        scroll_to_id(id);
                    }
                };
                open_from_hash();

                let listener = Closure::<dyn FnMut()>::new(open_from_hash);
                let window = web_sys::window();
                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "hashchange",
                        listener.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Failed to watch URL hash: {:?}", e);
                    }
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |id: &'static str| open.set(toggled(*open, id)))
    };

    html! {
        <section id={Section::Faq.id()} class="faq-section">
            <div class="section-heading">
                <h2>{"Frequently Asked Questions"}</h2>
                <p>{"Everything you need to know about QiYoga Studio"}</p>
            </div>
            <div class="faq-list">
                { for ENTRIES.iter().map(|entry| html! {
                    <FaqItem
                        id={entry.id}
                        question={entry.question}
                        is_open={*open == Some(entry.id)}
                        on_toggle={on_toggle.clone()}
                    >
                        <p>{entry.answer}</p>
                    </FaqItem>
                }) }
                <p class="faq-footer">
                    {"Still have questions? "}
                    <a href={format!("mailto:{}", SUPPORT_EMAIL)}>{SUPPORT_EMAIL}</a>
                </p>
            </div>
        </section>
    }
}
