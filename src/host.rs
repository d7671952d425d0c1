use std::fmt;

use async_trait::async_trait;

/// Opaque token identifying a piece of UI the host can show.
///
/// The flow never inspects a handle; it only carries handles from the
/// collaborators that mint them (pre-permission screens, capture surfaces)
/// to [`PresentationHost::present`]. A platform adapter maps handles back
/// to its own view objects; test doubles just record them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UiHandle(u64);

impl UiHandle {
    /// Creates a handle from a collaborator-chosen identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier this handle was created with.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for UiHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UiHandle({})", self.0)
    }
}

/// The UI side of the flow: shows screens, tears them down, routes to
/// settings.
///
/// A host tracks at most one active presentation; when the flow presents a
/// capture surface while the pre-permission screen is up, the host is
/// expected to stack it on the active presentation. A single
/// [`dismiss`](Self::dismiss) tears down the whole chain.
///
/// `dismiss` resolves only once the UI is actually gone — the flow relies
/// on that acknowledgment to guarantee nothing is emitted while UI is
/// still on screen.
#[async_trait]
pub trait PresentationHost: Send {
    /// Shows the given UI. Fire-and-forget; the flow learns about the
    /// user's interaction through the collaborator that minted the handle.
    fn present(&mut self, ui: UiHandle);

    /// Tears down everything this host currently presents and resolves
    /// when the teardown has completed.
    async fn dismiss(&mut self);

    /// Routes the user to the OS settings app (permission revocation and
    /// re-grant live there). The current presentation stays up.
    fn open_settings(&mut self);
}
