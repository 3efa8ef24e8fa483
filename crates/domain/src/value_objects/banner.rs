//! Notification banners with timed dismissal
//!
//! A banner stays fully visible for [`BANNER_DISMISS_AFTER`], fades for
//! [`BANNER_FADE_DURATION`], then is removed. The queue only tracks state;
//! the caller owns the timer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Time a banner stays fully visible
pub const BANNER_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Length of the fade-out before removal
pub const BANNER_FADE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// CSS class the page styles banners by
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BannerId(u64);

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "banner-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BannerPhase {
    #[default]
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub kind: BannerKind,
    pub message: String,
    pub phase: BannerPhase,
}

/// Banners currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerQueue {
    next_id: u64,
    banners: Vec<Banner>,
}

impl BannerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a banner. Ids are never reused within one queue.
    pub fn push(&mut self, kind: BannerKind, message: impl Into<String>) -> BannerId {
        let id = BannerId(self.next_id);
        self.next_id += 1;
        self.banners.push(Banner {
            id,
            kind,
            message: message.into(),
            phase: BannerPhase::Visible,
        });
        id
    }

    /// Start fading a banner; returns `false` if it is already gone
    pub fn begin_fade(&mut self, id: BannerId) -> bool {
        match self.banners.iter_mut().find(|b| b.id == id) {
            Some(banner) => {
                banner.phase = BannerPhase::Fading;
                true
            }
            None => false,
        }
    }

    /// Remove a banner; unknown ids are ignored
    pub fn dismiss(&mut self, id: BannerId) -> bool {
        let before = self.banners.len();
        self.banners.retain(|b| b.id != id);
        self.banners.len() != before
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}
