//! The screen's single outbound request.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::feed::FeedClient;
use crate::scope::MountScope;
use crate::ui::events::AppEvent;

/// Spawn the one fetch a mounted screen performs.
///
/// The result goes back to the UI loop as an [`AppEvent`]. A failure is
/// logged and reported as `FeedFailed`; it never leaves the task. If the
/// screen unmounts first, the request is dropped and nothing is sent.
pub fn spawn_fetch(
    runtime: &Handle,
    client: FeedClient,
    scope: MountScope,
    events: Sender<AppEvent>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        let result = tokio::select! {
            _ = scope.unmounted() => {
                tracing::debug!("Fetch abandoned: screen unmounted before response");
                return;
            }
            result = client.fetch() => result,
        };

        if scope.is_unmounted() {
            tracing::debug!("Discarding late fetch result for unmounted screen");
            return;
        }

        let event = match result {
            Ok(items) => AppEvent::FeedLoaded(items),
            Err(err) => {
                tracing::error!(error = %err, "Error fetching data");
                AppEvent::FeedFailed
            }
        };

        if events.send(event).is_err() {
            tracing::trace!("Fetch result dropped (UI loop gone)");
        }
    })
}
