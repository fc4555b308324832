use yew::prelude::*;

use crate::config::FULL_ACCESS_PRICE;
use crate::lease::entitlement::{pricing_cta, PricingCta};
use crate::pages::analyzer::error_banner;
use crate::utils::scroll::Section;

pub struct PricingView<'a> {
    pub has_full_access: bool,
    pub analysis_id: Option<&'a str>,
    pub error: Option<&'a str>,
    pub on_checkout: Callback<MouseEvent>,
}

pub fn cta_label(cta: PricingCta) -> String {
    match cta {
        PricingCta::HasFullAccess => "You Have Full Access ✓".to_string(),
        PricingCta::GetStarted => "Get Started".to_string(),
        PricingCta::Unlock => format!("Unlock Full Access - {}", FULL_ACCESS_PRICE),
    }
}

const FEATURES: [&str; 4] = [
    "Analyze 3-5 leases in 30 days",
    "Complete clause-by-clause breakdown",
    "Risk scoring & red flag alerts",
    "Negotiation tips for every issue",
];

pub fn pricing_section(view: PricingView<'_>) -> Html {
    let cta = pricing_cta(view.has_full_access, view.analysis_id);
    let button = match cta {
        PricingCta::HasFullAccess => html! {
            <button class="pricing-cta entitled" disabled=true>{cta_label(cta)}</button>
        },
        PricingCta::GetStarted | PricingCta::Unlock => html! {
            <button class="pricing-cta" onclick={view.on_checkout.clone()}>{cta_label(cta)}</button>
        },
    };

    html! {
        <section id={Section::Pricing.id()} class="pricing-section">
            <div class="section-heading">
                <h2>{"Simple, Transparent Pricing"}</h2>
                <p>{"One price. Full analysis. No hidden fees."}</p>
            </div>
            <div class="pricing-card">
                <span class="pricing-badge">{"Best Value"}</span>
                <h3>{"30-Day Full Access"}</h3>
                <div class="price">
                    <span class="amount">{FULL_ACCESS_PRICE}</span>
                    <span class="period">{"one-time payment"}</span>
                </div>
                <div class="alternatives">
                    <p>{"💰 Compare to alternatives:"}</p>
                    <ul>
                        <li>{"❌ Lawyer review: $150-300 per lease"}</li>
                        <li>{"❌ LegalZoom: $79 per document"}</li>
                        <li>{format!("✅ QiYoga Studio: {} for 30 days", FULL_ACCESS_PRICE)}</li>
                    </ul>
                </div>
                <ul class="features">
                    { for FEATURES.iter().map(|feature| html! {
                        <li><i class="fas fa-check-circle"></i><span>{*feature}</span></li>
                    }) }
                </ul>
                <p class="pricing-note">{"💡 Average user analyzes 4 leases before signing"}</p>
                { button }
                { error_banner(view.error) }
            </div>
        </section>
    }
}
