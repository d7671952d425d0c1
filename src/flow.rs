use tokio::sync::mpsc;

use crate::error::{FlowError, FlowOutcome};
use crate::events::{EventSink, FlowEvent, FlowState};
use crate::gateway::PermissionGateway;
use crate::host::PresentationHost;
use crate::options::{ClosePolicy, FlowOptions};
use crate::screen::PrePermissionScreen;
use crate::source::{AuthorizationState, CaptureMode, PermissionAction, Source};
use crate::surface::{CaptureEvent, CaptureRequest, CaptureSurface, CaptureSurfaceProvider};

/// Which UI the flow currently has up, if any.
///
/// Owned exclusively by the flow; consulted once at resolution to decide
/// whether a dismissal must precede the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PresentationState {
    Idle,
    PrePermission,
    Capture,
}

/// One end-to-end picking attempt.
///
/// A `PickerFlow` owns its collaborators for the duration of a single
/// invocation: a [`PermissionGateway`] for authorization state, a
/// [`PresentationHost`] for showing and tearing down UI, and a
/// [`CaptureSurfaceProvider`] for building the picker or scanner surface.
/// [`start`](Self::start) consumes the flow, so a second resolution of the
/// same attempt is unrepresentable; run another flow by building a new one.
///
/// The flow is a single-task cooperative state machine. Its only suspension
/// points are the collaborators' async calls (authorization request,
/// UI events, dismissal); it imposes no timeouts and waits indefinitely
/// for the user.
///
/// Two guarantees hold on every path, success and failure alike:
///
/// - exactly one outcome is produced per invocation;
/// - any UI the flow presented is dismissed (and the dismissal
///   acknowledged) before the outcome is emitted.
///
/// # Examples
///
/// ```no_run
/// # use picker_flow::{FlowOptions, PickerFlow, Source};
/// # async fn demo(
/// #     gateway: impl picker_flow::PermissionGateway,
/// #     host: impl picker_flow::PresentationHost,
/// #     provider: impl picker_flow::CaptureSurfaceProvider,
/// # ) {
/// let flow = PickerFlow::new(gateway, host, provider);
/// match flow.start(Source::Library, FlowOptions::new()).await {
///     Ok(image) => println!("picked {image}"),
///     Err(err) => eprintln!("picking failed: {err}"),
/// }
/// # }
/// ```
pub struct PickerFlow<G, H, P> {
    gateway: G,
    host: H,
    provider: P,
    events: EventSink,
}

impl<G, H, P> PickerFlow<G, H, P>
where
    G: PermissionGateway,
    H: PresentationHost,
    P: CaptureSurfaceProvider,
{
    /// Builds a flow around the given collaborators.
    pub fn new(gateway: G, host: H, provider: P) -> Self {
        Self {
            gateway,
            host,
            provider,
            events: EventSink::default(),
        }
    }

    /// Subscribes to the flow's diagnostics stream.
    ///
    /// Purely observational: the flow never blocks on, reads from, or
    /// fails because of this channel. Subscribing again replaces the
    /// previous subscriber.
    pub fn event_stream(&mut self) -> mpsc::UnboundedReceiver<FlowEvent> {
        self.events.subscribe()
    }

    /// Runs one picking attempt against `source` and resolves exactly once.
    ///
    /// Consumes the flow. All presented UI is torn down (with the host's
    /// dismissal acknowledged) before this future resolves, on failure
    /// paths included.
    pub async fn start(mut self, source: Source, mut options: FlowOptions) -> FlowOutcome {
        let mut presented = PresentationState::Idle;
        let outcome = self.drive(source, &mut options, &mut presented).await;

        // Resolve: teardown strictly precedes emission.
        self.events.entered(source, FlowState::Resolve);
        if presented != PresentationState::Idle {
            self.host.dismiss().await;
        }
        match &outcome {
            Ok(image) => self.events.completed(source, image.len()),
            Err(err) => self.events.failed(source, err.kind()),
        }
        outcome
    }

    /// Everything up to (but not including) teardown. Any `Err` returned
    /// here is terminal; `start` handles dismissal and emission.
    async fn drive(
        &mut self,
        source: Source,
        options: &mut FlowOptions,
        presented: &mut PresentationState,
    ) -> FlowOutcome {
        self.events.entered(source, FlowState::ValidateSource);
        let mode = capture_mode_for(source, options);
        if !self.provider.supports(source, mode) {
            return Err(FlowError::NotSupported);
        }

        self.events.entered(source, FlowState::CheckAuthorization);
        let status = self.gateway.current_status(source);
        self.events.permission_observed(source, status);

        match status {
            AuthorizationState::Authorized | AuthorizationState::LimitedAuthorized => {
                self.present_capture(source, mode, options, presented).await
            }
            AuthorizationState::Undetermined => match options.take_pre_permission() {
                Some(screen) => {
                    self.show_pre_permission(screen, source, mode, options, presented)
                        .await
                }
                None => self.request_then_capture(source, mode, options, presented).await,
            },
            // A denied source still shows the custom screen when one was
            // supplied, so the user can be routed to settings.
            AuthorizationState::Denied | AuthorizationState::Restricted => {
                match options.take_pre_permission() {
                    Some(screen) => {
                        self.show_pre_permission(screen, source, mode, options, presented)
                            .await
                    }
                    None => Err(FlowError::PermissionDenied),
                }
            }
            AuthorizationState::Unknown => Err(FlowError::UnknownPermissionState),
        }
    }

    /// Presents the caller's screen and loops on its action stream until a
    /// terminal action arrives. `Settings` re-routes and keeps waiting.
    async fn show_pre_permission(
        &mut self,
        mut screen: Box<dyn PrePermissionScreen>,
        source: Source,
        mode: CaptureMode,
        options: &FlowOptions,
        presented: &mut PresentationState,
    ) -> FlowOutcome {
        self.events.entered(source, FlowState::ShowPrePermission);
        screen.set_source(source);
        self.host.present(screen.handle());
        *presented = PresentationState::PrePermission;

        loop {
            let Some(action) = screen.next_action().await else {
                // Screen went away without a decision.
                return Err(FlowError::Unknown);
            };
            self.events.action_received(source, action);

            match action {
                PermissionAction::Settings => self.host.open_settings(),
                PermissionAction::Allow => {
                    return self.request_then_capture(source, mode, options, presented).await;
                }
                PermissionAction::DontAllow => return Err(FlowError::PermissionDenied),
                PermissionAction::Close => {
                    return Err(match options.on_close() {
                        ClosePolicy::Cancelled => FlowError::CancelledByUser,
                        ClosePolicy::Denied => FlowError::PermissionDenied,
                    });
                }
            }
        }
    }

    /// Fires the OS-level prompt; a full or limited grant continues into
    /// capture, anything else is a refusal.
    async fn request_then_capture(
        &mut self,
        source: Source,
        mode: CaptureMode,
        options: &FlowOptions,
        presented: &mut PresentationState,
    ) -> FlowOutcome {
        self.events.entered(source, FlowState::RequestAuthorization);
        let status = self.gateway.request_authorization(source).await;
        self.events.permission_observed(source, status);

        if status.grants_access() {
            self.present_capture(source, mode, options, presented).await
        } else {
            Err(FlowError::PermissionDenied)
        }
    }

    /// Builds and presents the capture surface, then classifies its one
    /// terminal event. When the pre-permission screen is still up, the
    /// host stacks the surface on top of it; the single dismissal at
    /// resolution tears down the whole chain.
    async fn present_capture(
        &mut self,
        source: Source,
        mode: CaptureMode,
        options: &FlowOptions,
        presented: &mut PresentationState,
    ) -> FlowOutcome {
        self.events.entered(source, FlowState::PresentCapture);
        let request = CaptureRequest {
            source,
            mode,
            media_types: options.accepted_media().to_vec(),
        };
        let mut surface = self.provider.create(&request);
        self.host.present(surface.handle());
        *presented = PresentationState::Capture;

        match surface.next_event().await {
            Some(CaptureEvent::Captured(image)) if image.is_empty() => Err(FlowError::ImageMissing),
            Some(CaptureEvent::Captured(image)) => Ok(image),
            Some(CaptureEvent::NoResult) => Err(FlowError::EmptyScan),
            Some(CaptureEvent::Cancelled) => Err(FlowError::CancelledByUser),
            Some(CaptureEvent::Failed(err)) => Err(FlowError::Surface(err)),
            None => Err(FlowError::Unknown),
        }
    }
}

/// The scanner only exists behind the camera; library flows always use the
/// plain picker.
fn capture_mode_for(source: Source, options: &FlowOptions) -> CaptureMode {
    match source {
        Source::Camera => options.capture_mode(),
        Source::Library => CaptureMode::Picker,
    }
}
