use async_trait::async_trait;

use crate::source::{AuthorizationState, Source};

/// Access to the platform's permission machinery for a [`Source`].
///
/// The flow queries [`current_status`](Self::current_status) fresh at the
/// start of every invocation and calls
/// [`request_authorization`](Self::request_authorization) at most once per
/// flow, only when the state machine decides the OS prompt is warranted.
///
/// # Examples
///
/// A gateway that always grants, useful as a starting point for adapters:
///
/// ```
/// use async_trait::async_trait;
/// use picker_flow::{AuthorizationState, PermissionGateway, Source};
///
/// struct AlwaysGranted;
///
/// #[async_trait]
/// impl PermissionGateway for AlwaysGranted {
///     fn current_status(&self, _source: Source) -> AuthorizationState {
///         AuthorizationState::Authorized
///     }
///
///     async fn request_authorization(&mut self, _source: Source) -> AuthorizationState {
///         AuthorizationState::Authorized
///     }
/// }
/// ```
#[async_trait]
pub trait PermissionGateway: Send {
    /// Snapshot of the current authorization state for `source`.
    ///
    /// Must not prompt the user; this is a read-only query.
    fn current_status(&self, source: Source) -> AuthorizationState;

    /// Triggers the OS-level authorization request for `source` and
    /// resolves with the state the user settled on. Delivers exactly one
    /// completion.
    async fn request_authorization(&mut self, source: Source) -> AuthorizationState;
}
