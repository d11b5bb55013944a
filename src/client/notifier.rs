//! Transient error banners with independent auto-dismiss timers.

use crate::ui::Surface;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::debug;

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub text: String,
}

/// Cheap to clone; clones share the same banner list.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<NotifierInner>,
}

struct Shown {
    banner: Banner,
    expires_at: Instant,
}

struct NotifierInner {
    banners: Mutex<VecDeque<Shown>>,
    next_id: AtomicU64,
    dismiss_after: Duration,
    surface: Arc<dyn Surface>,
}

impl NotifierInner {
    /// Remove banners matching `expired`, telling the surface about each one.
    fn dismiss_where(&self, expired: impl Fn(&Shown) -> bool) {
        let removed: Vec<u64> = self
            .banners
            .lock()
            .map(|mut banners| {
                let ids: Vec<u64> = banners
                    .iter()
                    .filter(|shown| expired(shown))
                    .map(|shown| shown.banner.id)
                    .collect();
                banners.retain(|shown| !expired(shown));
                ids
            })
            .unwrap_or_default();
        for id in removed {
            debug!(banner = id, "notifier.dismiss");
            self.surface.dismiss_banner(id);
        }
    }
}

impl Notifier {
    pub fn new(surface: Arc<dyn Surface>, dismiss_after: Duration) -> Self {
        Self {
            inner: Arc::new(NotifierInner {
                banners: Mutex::new(VecDeque::new()),
                next_id: AtomicU64::new(1),
                dismiss_after,
                surface,
            }),
        }
    }

    /// Show `text` at the head of the list and schedule its removal.
    ///
    /// Synchronous. Inside a tokio runtime a timer also pushes the dismissal
    /// to the surface; without one the banner simply expires from
    /// [`active`](Self::active). Returns the banner id.
    pub fn report(&self, text: impl Into<String>) -> u64 {
        let banner = Banner {
            id: self.inner.next_id.fetch_add(1, Ordering::Relaxed),
            text: text.into(),
        };
        let id = banner.id;
        debug!(banner = id, text = %banner.text, "notifier.report");

        self.inner.surface.show_banner(&banner);
        if let Ok(mut banners) = self.inner.banners.lock() {
            banners.push_front(Shown {
                banner,
                expires_at: Instant::now() + self.inner.dismiss_after,
            });
        }

        if let Ok(handle) = Handle::try_current() {
            let inner = Arc::clone(&self.inner);
            handle.spawn(async move {
                tokio::time::sleep(inner.dismiss_after).await;
                inner.dismiss_where(|shown| shown.banner.id == id);
            });
        }
        id
    }

    /// Banners currently on screen, newest first. Expired ones are dropped.
    pub fn active(&self) -> Vec<Banner> {
        let now = Instant::now();
        self.inner.dismiss_where(|shown| shown.expires_at <= now);
        self.inner
            .banners
            .lock()
            .map(|banners| banners.iter().map(|shown| shown.banner.clone()).collect())
            .unwrap_or_default()
    }
}
