//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn FooterSection() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="section-inner footer-grid">
                <div class="footer-brand">
                    <div class="brand">
                        <span class="brand-mark">"LB"</span>
                        <span class="brand-name">"Lotus Brothers"</span>
                    </div>
                    <p class="muted">
                        "Creating mindful spaces that balance architectural beauty with \
                         sustainable innovation. Based in Austin, building nationwide."
                    </p>
                </div>

                <div>
                    <h4 class="footer-heading">"Navigate"</h4>
                    <div class="footer-links">
                        <A href="/" attr:class="footer-link">"Home"</A>
                        <A href="/projects" attr:class="footer-link">"Projects"</A>
                        <A href="/about" attr:class="footer-link">"About"</A>
                        <A href="/contact" attr:class="footer-link">"Contact"</A>
                        <A href="/invest" attr:class="footer-link">"Invest"</A>
                    </div>
                </div>

                <div>
                    <h4 class="footer-heading">"Connect"</h4>
                    <div class="footer-links">
                        <a href="#" class="footer-link">"LinkedIn"</a>
                        <a href="#" class="footer-link">"Instagram"</a>
                        <a href="#" class="footer-link">"Twitter"</a>
                    </div>
                </div>
            </div>

            <div class="section-inner footer-bottom">
                <p class="muted-small">"© 2026 Lotus Brothers. All rights reserved."</p>
                <div class="footer-links-row">
                    <a href="#" class="footer-link">"Privacy"</a>
                    <a href="#" class="footer-link">"Terms"</a>
                </div>
            </div>
        </footer>
    }
}
