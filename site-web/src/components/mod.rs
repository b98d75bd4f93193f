//! UI Components

pub mod contact_section;
pub mod featured_projects;
pub mod footer;
pub mod hero;
pub mod invest_modal;
pub mod navbar;
pub mod philosophy;
pub mod stats;
pub mod testimonials;
pub mod wallet_button;

pub use contact_section::ContactSection;
pub use featured_projects::FeaturedProjects;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use invest_modal::InvestModal;
pub use navbar::Navbar;
pub use philosophy::PhilosophySection;
pub use stats::StatsSection;
pub use testimonials::TestimonialsSection;
pub use wallet_button::WalletButton;
