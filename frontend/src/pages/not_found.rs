use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="return-page">
            <div class="return-card">
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="primary-cta">{"Go to the homepage"}</Link<Route>>
            </div>
        </div>
    }
}
