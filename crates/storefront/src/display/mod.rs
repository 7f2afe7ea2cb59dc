//! Read-only projections of the content records.
//!
//! Each projection seeds itself from one repository read when mounted and
//! afterwards changes only through [`Projection::apply`] (a change published
//! on the same page) or [`Projection::reload`] (another page wrote the key).

mod benefits;
mod hero;
mod navbar;
mod showcase;
mod whatsapp;

pub use benefits::{BenefitCard, BenefitsView};
pub use hero::HeroView;
pub use navbar::NavbarView;
pub use showcase::ShowcaseView;
pub use whatsapp::{DEFAULT_WHATSAPP_NUMBER, WhatsAppLink};

use showroom_content::{ContentChange, ContentRepository};

/// A display component fed by one record.
pub trait Projection: Sized {
    /// Build the projection from the repository's current state.
    fn mount(repository: &ContentRepository) -> Self;

    /// Refresh from a published change. Returns whether the change applied.
    fn apply(&mut self, change: &ContentChange) -> bool;

    /// Re-read the record after another page changed it.
    fn reload(&mut self, repository: &ContentRepository) {
        *self = Self::mount(repository);
    }
}
