//! Page modules

pub mod about;
pub mod contact;
pub mod home;
pub mod invest;
pub mod projects;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use invest::InvestPage;
pub use projects::ProjectsPage;
