//! Full-screen hero section for the home page.

use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <img
                    src="https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=1920&q=80"
                    alt="Modern architecture"
                />
            </div>
            <div class="hero-content">
                <div class="hero-kicker">
                    <span class="rule"></span>
                    <span class="kicker">"Real Estate Development"</span>
                    <span class="rule"></span>
                </div>
                <h1 class="hero-title">
                    "Lotus"
                    <span class="hero-title-accent">"Brothers"</span>
                </h1>
                <p class="hero-subtitle">
                    "Where mindful design meets modern living. Building spaces that breathe."
                </p>
                <div class="hero-cta-row">
                    <a href="#projects" class="btn btn-gold">"Our Projects"</a>
                    <a href="#contact" class="btn btn-outline">"Get in Touch"</a>
                </div>
            </div>
            <div class="hero-scroll-hint">"⌄"</div>
        </section>
    }
}
