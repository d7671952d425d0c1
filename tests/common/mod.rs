//! Mock collaborators shared by the integration and property tests.
//!
//! Every observable collaborator call is appended to a shared [`Trace`],
//! so tests can assert both what the flow did and in which order.

#![allow(dead_code)] // Not every test binary uses every helper.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use picker_flow::{
    AuthorizationState, CaptureEvent, CaptureMode, CaptureRequest, CaptureSurface,
    CaptureSurfaceProvider, PermissionAction, PermissionGateway, PresentationHost,
    PrePermissionScreen, Source, UiHandle,
};

/// One observable collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    StatusQueried(Source),
    AuthorizationRequested(Source),
    Presented(UiHandle),
    Dismissed,
    SettingsOpened,
    SurfaceCreated { source: Source, mode: CaptureMode },
    ScreenSourceSet(Source),
}

pub type Trace = Arc<Mutex<Vec<Step>>>;

pub fn new_trace() -> Trace {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn steps(trace: &Trace) -> Vec<Step> {
    trace.lock().unwrap().clone()
}

fn record(trace: &Trace, step: Step) {
    trace.lock().unwrap().push(step);
}

/// Routes the flow's tracing output through the test harness capture, so
/// a failing scenario shows the structured log next to the trace assertions.
/// Safe to call from every test; repeat initialization is ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn screen_handle() -> UiHandle {
    UiHandle::new(100)
}

pub fn surface_handle() -> UiHandle {
    UiHandle::new(200)
}

/// Gateway with a scripted snapshot and a scripted prompt response.
pub struct MockGateway {
    pub status: AuthorizationState,
    pub prompt_result: AuthorizationState,
    trace: Trace,
}

impl MockGateway {
    pub fn new(status: AuthorizationState, prompt_result: AuthorizationState, trace: &Trace) -> Self {
        Self {
            status,
            prompt_result,
            trace: Arc::clone(trace),
        }
    }
}

#[async_trait]
impl PermissionGateway for MockGateway {
    fn current_status(&self, source: Source) -> AuthorizationState {
        record(&self.trace, Step::StatusQueried(source));
        self.status
    }

    async fn request_authorization(&mut self, source: Source) -> AuthorizationState {
        record(&self.trace, Step::AuthorizationRequested(source));
        self.prompt_result
    }
}

/// Host that records presentations, dismissals and settings routing.
pub struct MockHost {
    trace: Trace,
}

impl MockHost {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: Arc::clone(trace),
        }
    }
}

#[async_trait]
impl PresentationHost for MockHost {
    fn present(&mut self, ui: UiHandle) {
        record(&self.trace, Step::Presented(ui));
    }

    async fn dismiss(&mut self) {
        record(&self.trace, Step::Dismissed);
    }

    fn open_settings(&mut self) {
        record(&self.trace, Step::SettingsOpened);
    }
}

/// Surface that replays scripted terminal events, then reports exhaustion.
pub struct MockSurface {
    handle: UiHandle,
    events: VecDeque<CaptureEvent>,
}

#[async_trait]
impl CaptureSurface for MockSurface {
    fn handle(&self) -> UiHandle {
        self.handle
    }

    async fn next_event(&mut self) -> Option<CaptureEvent> {
        self.events.pop_front()
    }
}

/// Provider with a scripted capability answer handing its surface a
/// scripted event list.
pub struct MockProvider {
    pub supported: bool,
    events: VecDeque<CaptureEvent>,
    trace: Trace,
}

impl MockProvider {
    pub fn new(supported: bool, events: Vec<CaptureEvent>, trace: &Trace) -> Self {
        Self {
            supported,
            events: events.into(),
            trace: Arc::clone(trace),
        }
    }
}

impl CaptureSurfaceProvider for MockProvider {
    type Surface = MockSurface;

    fn supports(&self, _source: Source, _mode: CaptureMode) -> bool {
        self.supported
    }

    fn create(&mut self, request: &CaptureRequest) -> MockSurface {
        record(
            &self.trace,
            Step::SurfaceCreated {
                source: request.source,
                mode: request.mode,
            },
        );
        MockSurface {
            handle: surface_handle(),
            events: std::mem::take(&mut self.events),
        }
    }
}

/// Pre-permission screen replaying scripted user actions.
pub struct MockScreen {
    actions: VecDeque<PermissionAction>,
    trace: Trace,
}

impl MockScreen {
    pub fn new(actions: Vec<PermissionAction>, trace: &Trace) -> Self {
        Self {
            actions: actions.into(),
            trace: Arc::clone(trace),
        }
    }
}

#[async_trait]
impl PrePermissionScreen for MockScreen {
    fn handle(&self) -> UiHandle {
        screen_handle()
    }

    fn set_source(&mut self, source: Source) {
        record(&self.trace, Step::ScreenSourceSet(source));
    }

    async fn next_action(&mut self) -> Option<PermissionAction> {
        self.actions.pop_front()
    }
}

/// Index of the first occurrence of `step`, panicking when absent.
pub fn index_of(trace: &[Step], step: &Step) -> usize {
    trace
        .iter()
        .position(|s| s == step)
        .unwrap_or_else(|| panic!("step {step:?} not found in {trace:?}"))
}

pub fn count_of(trace: &[Step], step: &Step) -> usize {
    trace.iter().filter(|s| *s == step).count()
}
