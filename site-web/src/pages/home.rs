//! Home page: the full marketing scroll.

use leptos::prelude::*;

use crate::components::{
    ContactSection, FeaturedProjects, FooterSection, HeroSection, Navbar, PhilosophySection,
    StatsSection, TestimonialsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <main>
            <HeroSection/>
            <PhilosophySection/>
            <FeaturedProjects/>
            <StatsSection/>
            <TestimonialsSection/>
            <ContactSection/>
        </main>
        <FooterSection/>
    }
}
