use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SUPPORT_EMAIL;
use crate::lease::client::{HttpLeaseApi, LeaseApi};
use crate::lease::error::{ApiError, ValidationError};
use crate::lease::identity::{bootstrap_identity, BrowserStorage, ClientIdentity};
use crate::lease::models::AccessStatus;
use crate::utils::scroll::scroll_to_top;
use crate::Route;

/// Which checkout path brought the visitor back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    /// `/success`, reached from the hosted payment widget.
    HostedWidget,
    /// `/billing/success`, reached from a backend-created checkout session.
    CheckoutSession,
}

impl ReturnKind {
    fn heading(self) -> &'static str {
        match self {
            ReturnKind::HostedWidget => "Thank you for your purchase!",
            ReturnKind::CheckoutSession => "Payment received",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnState {
    Checking,
    Active { until: Option<String> },
    /// Paid but the service has not recorded it yet.
    Processing,
    Failed(String),
}

pub fn classify(outcome: Result<AccessStatus, ApiError>) -> ReturnState {
    match outcome {
        Ok(access) if access.has_access => ReturnState::Active {
            until: access.expires_on(),
        },
        Ok(_) => ReturnState::Processing,
        Err(e) => {
            log::warn!("Access check failed: {}", e);
            ReturnState::Failed(e.to_string())
        }
    }
}

/// Asks the service whether `identity` is entitled. This is the authoritative check.
pub async fn check_return_access<A: LeaseApi>(api: &A, identity: &ClientIdentity) -> ReturnState {
    if identity.is_empty() {
        return ReturnState::Failed(ValidationError::MissingIdentity.to_string());
    }
    classify(api.check_access(identity).await)
}

#[derive(Properties, PartialEq)]
pub struct PaymentReturnProps {
    pub kind: ReturnKind,
}

#[function_component(PaymentReturn)]
pub fn payment_return(props: &PaymentReturnProps) -> Html {
    let state = use_state(|| ReturnState::Checking);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                scroll_to_top();
                let identity = bootstrap_identity(BrowserStorage::local());
                spawn_local(async move {
                    state.set(check_return_access(&HttpLeaseApi, &identity).await);
                });
                || ()
            },
            (),
        );
    }

    let body = match &*state {
        ReturnState::Checking => html! {
            <p class="return-status">{"Checking your access..."}</p>
        },
        ReturnState::Active { until } => html! {
            <>
                <p class="return-status success">{"Full access is active."}</p>
                {
                    if let Some(until) = until {
                        html! { <p>{format!("Your access runs until {}.", until)}</p> }
                    } else {
                        html! {}
                    }
                }
            </>
        },
        ReturnState::Processing => html! {
            <p class="return-status pending">
                {"Your payment is still processing. This usually takes less than a minute; refresh this page shortly."}
            </p>
        },
        ReturnState::Failed(message) => html! {
            <>
                <p class="return-status error">{"We couldn't confirm your access right now."}</p>
                <p class="return-detail">{message}</p>
                <p>{format!("If you were charged, contact {} and we'll sort it out.", SUPPORT_EMAIL)}</p>
            </>
        },
    };

    html! {
        <div class="return-page">
            <div class="return-card">
                <h1>{props.kind.heading()}</h1>
                { body }
                <Link<Route> to={Route::Home} classes="primary-cta">
                    {"Back to the analyzer"}
                </Link<Route>>
            </div>
        </div>
    }
}
