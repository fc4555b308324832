use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::FULL_ACCESS_PRICE;
use crate::lease::entitlement::{locked_label, Gate};
use crate::lease::flow::Flow;
use crate::lease::models::{AnalysisData, ClauseFinding, RiskLevel};
use crate::utils::scroll::Section;

pub const EMAIL_INPUT_ID: &str = "checkout-email";

pub struct AnalyzerView<'a> {
    pub file_name: Option<&'a str>,
    pub analysis: &'a Flow<AnalysisData>,
    pub gate: Gate<'a>,
    pub checkout: &'a Flow<String>,
    pub email: &'a str,
    pub on_file_change: Callback<Event>,
    pub on_analyze: Callback<MouseEvent>,
    pub on_email_input: Callback<String>,
    pub on_unlock: Callback<MouseEvent>,
}

pub fn upload_status(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) => format!("Ready to analyze: {}", name),
        None => "Upload a lease PDF or image to begin analysis".to_string(),
    }
}

/// "Pages: 3 · Processing Time: 4.2s", skipping whatever the service left out.
pub fn processing_summary(data: &AnalysisData) -> Option<String> {
    let parts: Vec<String> = [
        data.page_count.map(|pages| format!("Pages: {}", pages)),
        data.processing_time
            .map(|secs| format!("Processing Time: {:.1}s", secs)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

pub fn risk_badge(level: RiskLevel) -> Html {
    html! { <span class={level.css_class()}>{level.label()}</span> }
}

pub fn error_banner(message: Option<&str>) -> Html {
    match message {
        Some(message) => html! {
            <div class="error-banner">
                <i class="fas fa-exclamation-circle"></i>
                <span>{message}</span>
            </div>
        },
        None => html! {},
    }
}

fn clause_card(clause: &ClauseFinding) -> Html {
    html! {
        <div class="clause-card" key={clause.clause_number.to_string()}>
            <span class="clause-number">{clause.clause_number}</span>
            <div class="clause-body">
                <p class="clause-text">{format!("\"{}\"", clause.clause_text)}</p>
                {
                    match clause.risk_level {
                        Some(level) => risk_badge(level),
                        None => html! {},
                    }
                }
                <p><strong>{"Analysis: "}</strong>{&clause.analysis}</p>
                <p><strong>{"Suggestion: "}</strong>{&clause.suggestion}</p>
            </div>
        </div>
    }
}

fn results_panel(data: &AnalysisData, clauses: &[ClauseFinding], locked: u32) -> Html {
    html! {
        <div class="analysis-results">
            <div class="results-header">
                <i class="fas fa-check-circle"></i>
                <h3>{"Analysis Complete"}</h3>
            </div>
            {
                if let Some(key_info) = data.key_info_pretty() {
                    html! {
                        <div class="key-info">
                            <p class="label">{"Key Information"}</p>
                            <pre>{key_info}</pre>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if clauses.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="clause-list">
                            <p class="label">
                                {format!("Clause Analysis ({} of {})", data.shown_clauses, data.total_clauses)}
                            </p>
                            { for clauses.iter().map(clause_card) }
                        </div>
                    }
                }
            }
            {
                if let Some(label) = locked_label(locked) {
                    html! {
                        <div class="locked-clauses">
                            <span>{"🔒"}</span>
                            <span>{label}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(summary) = processing_summary(data) {
                    html! { <div class="processing-summary">{summary}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn upsell(view: &AnalyzerView<'_>) -> Html {
    let on_email_input = view.on_email_input.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_email_input.emit(input.value());
    });
    let pending = view.checkout.is_busy();

    html! {
        <div class="upsell">
            <label for={EMAIL_INPUT_ID}>{"Email for your receipt"}</label>
            <input
                id={EMAIL_INPUT_ID}
                type="email"
                placeholder="you@example.com"
                value={view.email.to_string()}
                {oninput}
            />
            <button class="unlock-button" onclick={view.on_unlock.clone()} disabled={pending}>
                {
                    if pending {
                        "Creating checkout...".to_string()
                    } else {
                        format!("Unlock Full Analysis - {}", FULL_ACCESS_PRICE)
                    }
                }
                <div class="unlock-subtitle">{"Get 30-day unlimited access"}</div>
            </button>
            { error_banner(view.checkout.error()) }
        </div>
    }
}

fn export_placeholder() -> Html {
    html! {
        <div class="export-placeholder">
            <button disabled=true>{"📄 PDF Export (Coming Soon)"}</button>
            <p>{"We're working on this feature. For now, you can bookmark this page or screenshot your results."}</p>
        </div>
    }
}

pub fn analyzer_section(view: AnalyzerView<'_>) -> Html {
    let busy = view.analysis.is_busy();
    let latest = view.analysis.result();

    let outcome = match (view.gate, latest) {
        (Gate::Preview { clauses, locked }, Some(data)) => html! {
            <>
                { results_panel(data, clauses, locked) }
                { upsell(&view) }
            </>
        },
        (Gate::Full { clauses }, Some(data)) => html! {
            <>
                { results_panel(data, clauses, 0) }
                { export_placeholder() }
            </>
        },
        _ => html! {},
    };

    html! {
        <section id={Section::Analyze.id()} class="analyze-section">
            <div class="section-heading">
                <h2>{"Start Your Review"}</h2>
                <p>{"Upload your agreement to see how our AI audits your terms."}</p>
            </div>
            <div class="analyze-card">
                <label class="upload-box">
                    <i class="fas fa-cloud-upload-alt"></i>
                    <p>{view.file_name.unwrap_or("Drop your lease here (PDF or Image)")}</p>
                    <input type="file" accept=".pdf,image/*" onchange={view.on_file_change.clone()} />
                </label>
                <button class="analyze-button" onclick={view.on_analyze.clone()} disabled={busy}>
                    { if busy { "Analyzing..." } else { "Analyze My Lease Now" } }
                </button>
                <p class="upload-status">{upload_status(view.file_name)}</p>
                { error_banner(view.analysis.error()) }
                { outcome }
            </div>
        </section>
    }
}
