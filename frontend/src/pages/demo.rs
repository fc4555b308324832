use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::config::QUICK_CLAUSE_MAX_CHARS;
use crate::lease::flow::Flow;
use crate::lease::models::QuickClauseResult;
use crate::pages::analyzer::{error_banner, risk_badge};
use crate::utils::scroll::Section;

pub struct DemoView<'a> {
    pub text: &'a str,
    pub flow: &'a Flow<QuickClauseResult>,
    pub on_input: Callback<String>,
    pub on_submit: Callback<MouseEvent>,
    pub on_scroll: Callback<Section>,
}

/// Whether the analyze button is enabled.
pub fn can_submit(text: &str, busy: bool) -> bool {
    !busy && !text.trim().is_empty() && text.chars().count() <= QUICK_CLAUSE_MAX_CHARS
}

pub fn char_counter(text: &str) -> String {
    format!("{}/{}", text.chars().count(), QUICK_CLAUSE_MAX_CHARS)
}

pub fn demo_section(view: DemoView<'_>) -> Html {
    let busy = view.flow.is_busy();
    let on_input = view.on_input.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        on_input.emit(area.value());
    });
    let upload_link = {
        let on_scroll = view.on_scroll.clone();
        Callback::from(move |_: MouseEvent| on_scroll.emit(Section::Analyze))
    };

    html! {
        <section id={Section::Demo.id()} class="demo-section">
            <div class="section-heading">
                <h2>{"Try the AI Engine"}</h2>
                <p>{format!(
                    "Paste one short clause from your lease (max {} characters) for a quick preview.",
                    QUICK_CLAUSE_MAX_CHARS
                )}</p>
            </div>
            <div class="demo-card">
                <div class="textarea-wrap">
                    <textarea
                        value={view.text.to_string()}
                        placeholder="Example: 'Landlord may terminate this lease with 5 days notice...'"
                        {oninput}
                    />
                    <div class="char-counter">{char_counter(view.text)}</div>
                </div>
                <button
                    class="demo-button"
                    onclick={view.on_submit.clone()}
                    disabled={!can_submit(view.text, busy)}
                >
                    { if busy { "Analyzing..." } else { "Analyze Clause" } }
                </button>
                { error_banner(view.flow.error()) }
                {
                    if let Some(result) = view.flow.result() {
                        html! {
                            <div class="quick-result">
                                <div class="quick-result-header">
                                    <span>{"Analysis Result"}</span>
                                    { risk_badge(result.risk_level) }
                                </div>
                                <p><strong>{"Analysis: "}</strong>{&result.analysis}</p>
                                <p><strong>{"Suggestion: "}</strong>{&result.suggestion}</p>
                                <p class="quick-result-footer">
                                    {"💡 Want to analyze your full lease? "}
                                    <button class="link-button" onclick={upload_link}>{"Upload it above"}</button>
                                    {" for complete analysis."}
                                </p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_needs_text_within_the_limit() {
        assert!(!can_submit("", false));
        assert!(!can_submit("   ", false));
        assert!(can_submit("Tenant pays all repairs.", false));
        assert!(!can_submit("Tenant pays all repairs.", true));
        assert!(can_submit(&"a".repeat(300), false));
        assert!(!can_submit(&"a".repeat(301), false));
    }

    #[test]
    fn counter_counts_characters() {
        assert_eq!(char_counter("ééé"), "3/300");
    }

    #[test]
    fn emoji_count_as_one_character_each() {
        let emoji = "🏠".repeat(300);
        assert_eq!(char_counter(&emoji), "300/300");
        assert!(can_submit(&emoji, false));
        assert!(!can_submit(&format!("{}🏠", emoji), false));
    }
}
