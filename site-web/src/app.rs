//! Application shell: router plus the global wallet context.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::pages::{AboutPage, ContactPage, HomePage, InvestPage, ProjectsPage};
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/projects") view=ProjectsPage/>
                <Route path=path!("/about") view=AboutPage/>
                <Route path=path!("/contact") view=ContactPage/>
                <Route path=path!("/invest") view=InvestPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page-centered">
            <div class="card" style="max-width: 480px; text-align: center;">
                <h1 class="page-title">"404"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn btn-primary" style="margin-top: 20px; display: inline-block;">
                        "Back to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
