use async_trait::async_trait;

use crate::host::UiHandle;
use crate::source::{PermissionAction, Source};

/// A pluggable screen shown before the OS permission prompt.
///
/// Applications supply one to explain why access is needed (undetermined
/// state) or to route the user to settings (denied / restricted state).
/// The screen emits user choices through a single-shot action stream:
/// [`next_action`](Self::next_action) yields [`PermissionAction::Settings`]
/// any number of times, then exactly one terminal action.
///
/// The flow presents the screen's handle through the host; rendering is
/// entirely the implementor's business.
#[async_trait]
pub trait PrePermissionScreen: Send {
    /// Handle the host uses to show this screen.
    fn handle(&self) -> UiHandle;

    /// Tells the screen which source the flow is asking about, so it can
    /// adjust its copy. Called once, before presentation.
    fn set_source(&mut self, source: Source);

    /// Waits for the next user action. `None` means the screen went away
    /// without a decision, which the flow treats as an internal error.
    async fn next_action(&mut self) -> Option<PermissionAction>;
}
