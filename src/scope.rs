//! Binds async work to the lifetime of the screen that started it.
//!
//! The screen owns a [`ScreenLifetime`]; background work holds a
//! [`MountScope`] and checks it before reporting back. Dropping the lifetime
//! unmounts the screen, so a response that arrives late is discarded instead
//! of being applied to a view that no longer exists.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Owner side, held by the mounted view.
#[derive(Debug)]
pub struct ScreenLifetime {
    unmounted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self {
            unmounted: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Hand out a scope for work started on behalf of this view.
    pub fn scope(&self) -> MountScope {
        MountScope {
            unmounted: Arc::clone(&self.unmounted),
            notify: Arc::clone(&self.notify),
        }
    }

    pub fn unmount(&self) {
        if !self.unmounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("Screen unmounted");
            self.notify.notify_waiters();
        }
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted.load(Ordering::SeqCst)
    }
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScreenLifetime {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Worker side: cheap to clone, never keeps the view alive.
#[derive(Clone, Debug)]
pub struct MountScope {
    unmounted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl MountScope {
    pub fn is_unmounted(&self) -> bool {
        self.unmounted.load(Ordering::SeqCst)
    }

    /// Resolve once the owning view is gone.
    pub async fn unmounted(&self) {
        // Register with Notify before reading the flag: an unmount landing
        // between the check and the await would otherwise be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_unmounted() {
            return;
        }
        notified.await;
    }
}
