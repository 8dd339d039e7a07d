//! Pages rendered from compiled-in data.

mod about;
mod faculty;
mod not_found;

pub use about::AboutPage;
pub use faculty::FacultyPage;
pub use not_found::NotFoundPage;
