//! Standalone contact page.

use leptos::prelude::*;

use crate::components::{ContactSection, FooterSection, Navbar};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="page-offset">
            <ContactSection/>
        </main>
        <FooterSection/>
    }
}
