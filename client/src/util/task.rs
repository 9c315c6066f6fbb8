//! Fire-and-forget futures for page-level REST calls.

use std::future::Future;

/// Run `fut` on the browser event loop. During server rendering the
/// future is dropped unpolled; pages only issue requests after hydration.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
