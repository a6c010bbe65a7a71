//! The five pages. Copy comes from [`SiteContent`](crate::models::SiteContent).

mod about;
mod contact;
mod events;
mod home;
mod services;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use events::EventsPage;
pub use home::HomePage;
pub use services::ServicesPage;
