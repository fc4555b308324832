use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod lease;
mod pages;
mod utils;

use components::layout::Layout;
use lease::checkout::{PaddleWidget, WidgetHandle};
use pages::{
    home::Home,
    legal::{Privacy, Refund, Terms},
    not_found::NotFound,
    success::{PaymentReturn, ReturnKind},
};
use utils::scroll::PendingScroll;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/refund")]
    Refund,
    #[at("/success")]
    Success,
    #[at("/billing/success")]
    BillingSuccess,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Terms => html! { <Terms /> },
        Route::Privacy => html! { <Privacy /> },
        Route::Refund => html! { <Refund /> },
        Route::Success => html! { <PaymentReturn kind={ReturnKind::HostedWidget} /> },
        Route::BillingSuccess => html! { <PaymentReturn kind={ReturnKind::CheckoutSession} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    widget: WidgetHandle,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let pending_scroll = use_state(PendingScroll::default);

    html! {
        <ContextProvider<WidgetHandle> context={props.widget.clone()}>
            <ContextProvider<PendingScroll> context={(*pending_scroll).clone()}>
                <BrowserRouter>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </BrowserRouter>
            </ContextProvider<PendingScroll>>
        </ContextProvider<WidgetHandle>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Backend URL: {}", config::get_backend_url());

    // Created once; pages reach it through context instead of `window.Paddle`.
    let widget = PaddleWidget::initialize(config::paddle_client_token());
    yew::Renderer::<App>::with_props(AppProps {
        widget: WidgetHandle::new(widget),
    })
    .render();
}
