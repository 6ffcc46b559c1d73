//! Task views handed to the scheduler
//!
//! A scheduler only needs two things from a crawl target: a stable id to
//! deduplicate on and the settings to download with. Both views below expose
//! exactly that and never copy the underlying [`Site`].

use crate::site::Site;
use crate::SiteError;
use std::sync::Arc;

/// What a scheduler or task executor sees of a crawl target
pub trait Task {
    /// Stable identifier of the task, the site's domain
    fn uuid(&self) -> &str;

    /// The site this task was created from
    fn site(&self) -> &Site;
}

/// A borrowed task view, valid as long as the site it came from
#[derive(Debug, Clone, Copy)]
pub struct SiteTask<'a> {
    uuid: &'a str,
    site: &'a Site,
}

impl<'a> SiteTask<'a> {
    /// Creates a task view over `site`
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingDomain`] if the site has no domain yet.
    pub fn new(site: &'a Site) -> Result<Self, SiteError> {
        let uuid = site.domain().ok_or(SiteError::MissingDomain)?;
        Ok(Self { uuid, site })
    }
}

impl Task for SiteTask<'_> {
    fn uuid(&self) -> &str {
        self.uuid
    }

    fn site(&self) -> &Site {
        self.site
    }
}

/// An owned task view over a site shared between workers
#[derive(Debug, Clone)]
pub struct SharedSiteTask {
    site: Arc<Site>,
}

impl SharedSiteTask {
    /// Wraps a shared site
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingDomain`] if the site has no domain yet.
    pub fn new(site: Arc<Site>) -> Result<Self, SiteError> {
        if site.domain().is_none() {
            return Err(SiteError::MissingDomain);
        }
        Ok(Self { site })
    }

    /// Returns another handle to the shared site
    pub fn shared_site(&self) -> Arc<Site> {
        Arc::clone(&self.site)
    }
}

impl Task for SharedSiteTask {
    fn uuid(&self) -> &str {
        // Checked in `new`, and the site is immutable behind the Arc.
        self.site.domain().unwrap_or_default()
    }

    fn site(&self) -> &Site {
        &self.site
    }
}

impl Site {
    /// Returns a task view over this site
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingDomain`] if the site has no domain yet.
    pub fn to_task(&self) -> Result<SiteTask<'_>, SiteError> {
        SiteTask::new(self)
    }

    /// Moves this site behind an `Arc` and returns a task view over it
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingDomain`] if the site has no domain yet.
    pub fn into_shared_task(self) -> Result<SharedSiteTask, SiteError> {
        SharedSiteTask::new(Arc::new(self))
    }
}
