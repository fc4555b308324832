//! Static sections of the home page.

use yew::prelude::*;

use crate::config::{FULL_ACCESS_PRICE, SUPPORT_EMAIL};
use crate::utils::scroll::Section;

fn scroll_button(on_scroll: &Callback<Section>, section: Section, class: &'static str, label: &'static str) -> Html {
    let on_scroll = on_scroll.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_scroll.emit(section));
    html! {
        <button class={class} {onclick}>
            {label}
            <i class="fas fa-arrow-right"></i>
        </button>
    }
}

pub fn hero(on_scroll: &Callback<Section>) -> Html {
    html! {
        <section class="hero">
            <span class="hero-badge">{"Trusted by First-Time Renters across the U.S."}</span>
            <h1>{"AI-Powered Lease Analysis"}</h1>
            <p class="hero-subtitle">
                {"Upload your rental agreement and get 5 key clauses analyzed free. No credit card required."}
            </p>
            { scroll_button(on_scroll, Section::Analyze, "hero-cta", "Try Free Preview") }
            <div class="hero-points">
                <span><i class="fas fa-check-circle"></i>{" No signup needed"}</span>
                <span><i class="fas fa-check-circle"></i>{" Results in 10 seconds"}</span>
                <span><i class="fas fa-check-circle"></i>{" Trusted by 500+ renters"}</span>
            </div>
        </section>
    }
}

const STATS: [(&str, &str); 4] = [
    ("12,847+", "Leases Analyzed"),
    ("$2.3M+", "Saved in Unfair Charges"),
    ("89%", "Found Hidden Red Flags"),
    ("4.9★", "Average Rating"),
];

pub fn stats() -> Html {
    html! {
        <section class="stats">
            { for STATS.iter().map(|(value, label)| html! {
                <div class="stat">
                    <div class="stat-value">{*value}</div>
                    <div class="stat-label">{*label}</div>
                </div>
            }) }
        </section>
    }
}

pub fn how_it_works(on_scroll: &Callback<Section>) -> Html {
    html! {
        <section id={Section::HowItWorks.id()} class="how-it-works">
            <div class="section-heading">
                <h2>{"How the Report Works"}</h2>
                <p>{"We provide clear, actionable intelligence to protect your rights as a tenant."}</p>
            </div>
            <div class="report-sample">
                <h3>{format!("Full Lease Analysis ({})", FULL_ACCESS_PRICE)}</h3>
                <p>{"Complete clause-by-clause breakdown with risk scoring."}</p>
                <div class="sample-flag">
                    <div class="sample-flag-header">
                        <span class="risk-badge risk-danger">{"🚨 High Risk"}</span>
                        <h4>{"Sample Red Flag"}</h4>
                    </div>
                    <blockquote>{"\"Tenant is responsible for all plumbing repairs regardless of fault.\""}</blockquote>
                    <p><strong>{"Analysis: "}</strong>
                        {"This shifts legal maintenance duties to you. Standard leases limit tenant responsibility to damages caused by negligence."}
                    </p>
                    <p><strong>{"Suggestion: "}</strong>
                        {"Request this be amended to \"Tenant responsible for plumbing repairs caused by tenant negligence only.\""}
                    </p>
                </div>
                <p class="sample-footer">{"See all 15+ clauses analyzed in your lease →"}</p>
            </div>
            { scroll_button(on_scroll, Section::Pricing, "secondary-cta", "See Full Pricing Details") }
        </section>
    }
}

const COMPARISON: [(&str, &str); 6] = [
    ("Spend 2-3 hours reading fine print", "Get results in 10 seconds"),
    ("Easy to miss hidden red flags", "AI scans every clause automatically"),
    ("Hire a lawyer for $200-500", "Pay only $9.90 for unlimited access"),
    ("No guidance on what to negotiate", "Get specific suggestions for every issue"),
    ("Sign lease and hope for the best", "Know exactly what you're agreeing to"),
    ("Discover problems after moving in", "Catch unfair terms before signing"),
];

pub fn comparison(on_scroll: &Callback<Section>) -> Html {
    html! {
        <section class="comparison">
            <div class="section-heading">
                <h2>{"Why Choose AI-Powered Analysis?"}</h2>
                <p>{"See how we compare to traditional methods"}</p>
            </div>
            <div class="comparison-table">
                <div class="comparison-row header">
                    <h3>{"Without QiYoga"}</h3>
                    <h3>{"With QiYoga"}</h3>
                </div>
                { for COMPARISON.iter().map(|(without, with)| html! {
                    <div class="comparison-row">
                        <div class="without"><i class="fas fa-times"></i><span>{*without}</span></div>
                        <div class="with"><i class="fas fa-check-circle"></i><span>{*with}</span></div>
                    </div>
                }) }
            </div>
            { scroll_button(on_scroll, Section::Analyze, "primary-cta", "Start Your Free Analysis") }
        </section>
    }
}

const REVIEWS: [(&str, &str, &str); 3] = [
    (
        "Michael Chen",
        "Manhattan",
        "I was about to sign a lease that made me pay for ALL building repairs, even structural issues. QiYoga's AI caught it in 20 seconds. I negotiated it out.",
    ),
    (
        "Jessica R.",
        "Queens",
        "The landlord tried to sneak in a clause where he could enter 'at any time without notice.' QiYoga flagged it immediately and gave me the exact wording to push back.",
    ),
    (
        "David Park",
        "Brooklyn",
        "I'm not a lawyer, but with QiYoga I felt like I had one. It found 3 major red flags in my lease, including an unfair late fee structure.",
    ),
];

pub fn reviews() -> Html {
    html! {
        <section class="reviews">
            <div class="section-heading">
                <h2>{"What Renters Say About Us"}</h2>
                <p>{"Join 2,000+ tenants who avoided unfair lease terms"}</p>
            </div>
            <div class="review-grid">
                { for REVIEWS.iter().map(|(name, place, quote)| html! {
                    <div class="review-card">
                        <div class="reviewer">
                            <p class="reviewer-name">{*name}</p>
                            <p class="reviewer-place">{*place}</p>
                        </div>
                        <div class="stars">{"★★★★★"}</div>
                        <p class="quote">{format!("\"{}\"", quote)}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

pub fn contact() -> Html {
    html! {
        <section id={Section::Contact.id()} class="contact">
            <h2>{"Need Assistance?"}</h2>
            <p>{"Reach out to our team for questions about your report or our digital consulting."}</p>
            <a class="contact-email" href={format!("mailto:{}", SUPPORT_EMAIL)}>
                <i class="fas fa-envelope"></i>
                <span>{SUPPORT_EMAIL}</span>
            </a>
        </section>
    }
}
