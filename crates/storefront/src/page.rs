//! A mounted storefront page.
//!
//! [`PageInstance`] is the equivalent of one browser tab: it owns a
//! repository over its own page storage, the mounted projections, and the
//! two subscriptions that keep them current. Notifications are buffered
//! until [`PageInstance::pump`] is called.

use serde::Serialize;
use showroom_admin::View;
use showroom_content::{ContentRepository, Origin, StorageEvents, Subscription, keys};

use crate::display::{BenefitsView, HeroView, NavbarView, Projection, ShowcaseView, WhatsAppLink};

/// One page of the storefront with its projections mounted.
#[derive(Debug)]
pub struct PageInstance {
    repository: ContentRepository,
    changes: Subscription,
    storage_events: StorageEvents,
    navbar: NavbarView,
    hero: HeroView,
    showcase: ShowcaseView,
    benefits: BenefitsView,
}

/// Everything a visitor sees, ready to serialize.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub navbar: NavbarView,
    pub hero: HeroView,
    pub hero_video: String,
    pub showcase: ShowcaseView,
    pub benefits: BenefitsView,
    pub contact: ContactLinks,
    pub view: View,
}

/// Prefilled WhatsApp links for each section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLinks {
    pub hero: String,
    pub showcase: String,
    pub benefits: String,
}

impl PageInstance {
    /// Open a new page on `origin` and mount every projection.
    #[must_use]
    pub fn open(origin: &Origin) -> Self {
        Self::mount(ContentRepository::new(origin.open_page()))
    }

    /// Mount every projection over an existing page repository.
    #[must_use]
    pub fn mount(repository: ContentRepository) -> Self {
        // Subscribe before the seed reads so nothing committed in between is lost.
        let changes = repository.notifier().subscribe();
        let storage_events = repository.storage().subscribe();
        repository.refresh_style();

        Self {
            navbar: NavbarView::mount(&repository),
            hero: HeroView::mount(&repository),
            showcase: ShowcaseView::mount(&repository),
            benefits: BenefitsView::mount(&repository),
            repository,
            changes,
            storage_events,
        }
    }

    #[must_use]
    pub const fn repository(&self) -> &ContentRepository {
        &self.repository
    }

    #[must_use]
    pub const fn navbar(&self) -> &NavbarView {
        &self.navbar
    }

    #[must_use]
    pub const fn hero(&self) -> &HeroView {
        &self.hero
    }

    #[must_use]
    pub const fn showcase(&self) -> &ShowcaseView {
        &self.showcase
    }

    pub const fn showcase_mut(&mut self) -> &mut ShowcaseView {
        &mut self.showcase
    }

    #[must_use]
    pub const fn benefits(&self) -> &BenefitsView {
        &self.benefits
    }

    /// Deliver every pending notification to the projections.
    ///
    /// If either channel dropped notifications, every projection is re-seeded
    /// from the store instead. Returns the number of projection refreshes
    /// performed.
    pub fn pump(&mut self) -> usize {
        let mut refreshed = 0;
        let mut lagged = false;

        while let Some(change) = self.changes.try_next() {
            let Ok(change) = change else {
                lagged = true;
                continue;
            };
            refreshed += usize::from(self.navbar.apply(&change));
            refreshed += usize::from(self.hero.apply(&change));
            refreshed += usize::from(self.showcase.apply(&change));
            refreshed += usize::from(self.benefits.apply(&change));
        }

        while let Some(event) = self.storage_events.try_next() {
            match event {
                Ok(event) => refreshed += self.reload(&event.key),
                Err(_) => lagged = true,
            }
        }

        if lagged {
            refreshed = self.reload(keys::THEME) + self.reload(keys::PRODUCT);
            tracing::info!(page = %self.repository.page(), "Notifications dropped, page re-seeded");
        }

        if refreshed > 0 {
            tracing::debug!(page = %self.repository.page(), refreshed, "Page refreshed");
        }
        refreshed
    }

    fn reload(&mut self, key: &str) -> usize {
        let repository = &self.repository;
        match key {
            keys::THEME => {
                repository.refresh_style();
                self.navbar.reload(repository);
                1
            }
            keys::PRODUCT => {
                self.hero.reload(repository);
                self.showcase.reload(repository);
                self.benefits.reload(repository);
                3
            }
            _ => 0,
        }
    }

    /// Serializable view of the page.
    #[must_use]
    pub fn snapshot(&self, whatsapp: &WhatsAppLink, view: View) -> PageSnapshot {
        PageSnapshot {
            navbar: self.navbar.clone(),
            hero: self.hero.clone(),
            hero_video: self.hero.autoplay_video_url(),
            showcase: self.showcase.clone(),
            benefits: self.benefits.clone(),
            contact: ContactLinks {
                hero: whatsapp.interested_in(self.hero.product_title()),
                showcase: whatsapp.showcase_inquiry(self.showcase.title()),
                benefits: whatsapp.questions(),
            },
            view,
        }
    }
}
