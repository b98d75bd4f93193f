//! Site navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href="/" attr:class="brand">
                    <span class="brand-mark">"LB"</span>
                    <span class="brand-name">"Lotus Brothers"</span>
                </A>
                <div class="nav-links">
                    <A href="/" attr:class="nav-link">"Home"</A>
                    <A href="/projects" attr:class="nav-link">"Projects"</A>
                    <A href="/about" attr:class="nav-link">"About"</A>
                    <A href="/contact" attr:class="nav-link">"Contact"</A>
                    <A href="/invest" attr:class="nav-link nav-link-accent">"Invest"</A>
                </div>
            </div>
        </nav>
    }
}
