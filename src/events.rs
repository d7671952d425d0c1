use std::fmt;

use tokio::sync::mpsc;

use crate::source::{AuthorizationState, PermissionAction, Source};

/// States of the picking flow, in the order they can be entered.
///
/// Carried on [`FlowEvent::Entered`] so observers can follow transitions;
/// the flow itself never branches on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Platform capability check for the requested source and mode.
    ValidateSource,
    /// Fresh authorization snapshot for the source.
    CheckAuthorization,
    /// The caller-supplied pre-permission screen is up.
    ShowPrePermission,
    /// OS-level authorization prompt is in flight.
    RequestAuthorization,
    /// The capture surface is up.
    PresentCapture,
    /// Teardown before the outcome is emitted.
    Resolve,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowState::ValidateSource => "validate_source",
            FlowState::CheckAuthorization => "check_authorization",
            FlowState::ShowPrePermission => "show_pre_permission",
            FlowState::RequestAuthorization => "request_authorization",
            FlowState::PresentCapture => "present_capture",
            FlowState::Resolve => "resolve",
        };
        f.write_str(name)
    }
}

/// Diagnostics emitted by a running flow.
///
/// This is a passive stream: the flow never reads it back, observers may
/// drop it at any time, and a full or closed channel never affects control
/// flow. Subscribe via
/// [`PickerFlow::event_stream`](crate::PickerFlow::event_stream).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// The flow entered a state.
    Entered(FlowState),
    /// An authorization snapshot or request completion was observed.
    PermissionObserved {
        /// Source the state applies to.
        source: Source,
        /// The state the gateway reported.
        state: AuthorizationState,
    },
    /// The user acted on the pre-permission screen.
    ActionReceived(PermissionAction),
    /// The flow resolved successfully with a payload of this size.
    Completed {
        /// Length of the delivered image payload in bytes.
        image_len: usize,
    },
    /// The flow resolved with the named error kind.
    Failed {
        /// Stable tag from [`FlowError::kind`](crate::FlowError::kind).
        kind: &'static str,
    },
}

/// Fans flow diagnostics out to `tracing` and the optional subscriber.
///
/// Owned by the flow; the subscriber side is handed out once and send
/// failures are ignored (an observer hanging up must not fail a flow).
#[derive(Debug, Default)]
pub(crate) struct EventSink {
    subscriber: Option<mpsc::UnboundedSender<FlowEvent>>,
}

impl EventSink {
    /// Creates the subscriber channel, replacing any previous one.
    pub(crate) fn subscribe(&mut self) -> mpsc::UnboundedReceiver<FlowEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscriber = Some(tx);
        rx
    }

    pub(crate) fn entered(&self, source: Source, state: FlowState) {
        tracing::debug!(%source, %state, "flow state entered");
        self.forward(FlowEvent::Entered(state));
    }

    pub(crate) fn permission_observed(&self, source: Source, state: AuthorizationState) {
        tracing::info!(%source, permission = %state, "permission state observed");
        self.forward(FlowEvent::PermissionObserved { source, state });
    }

    pub(crate) fn action_received(&self, source: Source, action: PermissionAction) {
        tracing::info!(%source, ?action, "pre-permission action received");
        self.forward(FlowEvent::ActionReceived(action));
    }

    pub(crate) fn completed(&self, source: Source, image_len: usize) {
        tracing::info!(%source, image_len, "flow completed");
        self.forward(FlowEvent::Completed { image_len });
    }

    pub(crate) fn failed(&self, source: Source, kind: &'static str) {
        tracing::warn!(%source, error = kind, "flow failed");
        self.forward(FlowEvent::Failed { kind });
    }

    fn forward(&self, event: FlowEvent) {
        if let Some(tx) = &self.subscriber {
            let _ = tx.send(event);
        }
    }
}
