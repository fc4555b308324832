use yew::prelude::*;

use crate::config::{FULL_ACCESS_PRICE, SUPPORT_EMAIL};
use crate::utils::scroll::scroll_to_top;

const LAST_UPDATED: &str = "January 2025";

struct Clause {
    heading: &'static str,
    body: String,
}

fn clause(heading: &'static str, body: impl Into<String>) -> Clause {
    Clause {
        heading,
        body: body.into(),
    }
}

fn legal_page(title: &'static str, clauses: Vec<Clause>) -> Html {
    html! {
        <div class="legal-page">
            <h1>{title}</h1>
            <p class="legal-updated">{format!("Last updated: {}", LAST_UPDATED)}</p>
            { for clauses.into_iter().map(|clause| html! {
                <section class="legal-section">
                    <h2>{clause.heading}</h2>
                    <p>{clause.body}</p>
                </section>
            }) }
        </div>
    }
}

#[hook]
fn use_scroll_top_on_mount() {
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        (),
    );
}

#[function_component(Terms)]
pub fn terms() -> Html {
    use_scroll_top_on_mount();
    legal_page(
        "Terms of Service",
        vec![
            clause(
                "Service",
                "QiYoga Studio provides online, AI-assisted explanations of residential lease agreements. The service is digital consulting only; no physical goods or in-person services are provided.",
            ),
            clause(
                "Not legal advice",
                "Analyses are informational and do not create an attorney-client relationship. For complex or high-stakes agreements, consult a licensed attorney in your state.",
            ),
            clause(
                "Payment",
                format!(
                    "Full access costs {} as a one-time payment and lasts 30 days from purchase. Payments are processed by Paddle, our merchant of record.",
                    FULL_ACCESS_PRICE
                ),
            ),
            clause(
                "Acceptable use",
                "Upload only documents you are entitled to share. Do not attempt to disrupt the service or access analyses belonging to other visitors.",
            ),
            clause("Contact", format!("Questions about these terms: {}", SUPPORT_EMAIL)),
        ],
    )
}

#[function_component(Privacy)]
pub fn privacy() -> Html {
    use_scroll_top_on_mount();
    legal_page(
        "Privacy Policy",
        vec![
            clause(
                "What we collect",
                "The lease documents and clauses you submit, an anonymous identifier stored in your browser, and the email address you give at checkout.",
            ),
            clause(
                "How we use it",
                "Documents are used only to produce your analysis. The anonymous identifier links your purchases to your analyses without an account.",
            ),
            clause(
                "Retention",
                "Uploaded documents are deleted within 30 days after analysis.",
            ),
            clause(
                "Sharing",
                "We never sell or share your data with landlords, brokers or advertisers. Payment details are handled by Paddle and never reach our servers.",
            ),
            clause(
                "Your choices",
                format!(
                    "Clear your browser storage to reset the anonymous identifier, or email {} to request deletion of your data.",
                    SUPPORT_EMAIL
                ),
            ),
        ],
    )
}

#[function_component(Refund)]
pub fn refund() -> Html {
    use_scroll_top_on_mount();
    legal_page(
        "Refund Policy",
        vec![
            clause(
                "14-day guarantee",
                "If you are not satisfied with your analysis for any reason, request a refund within 14 days of purchase for the full amount.",
            ),
            clause(
                "How to request",
                format!(
                    "Email {} with the address used at checkout. Refunds are issued through Paddle to the original payment method.",
                    SUPPORT_EMAIL
                ),
            ),
            clause(
                "Processing time",
                "Refunds are usually processed within 5 business days; your bank may take longer to show them.",
            ),
        ],
    )
}
