use async_trait::async_trait;

use crate::error::SurfaceError;
use crate::host::UiHandle;
use crate::image::ImageData;
use crate::source::{CaptureMode, MediaType, Source};

/// What the flow asks a provider to build a surface for.
///
/// Bundles the source, the resolved capture mode and the accepted media
/// kinds so a provider gets everything in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    /// Which source the surface captures from.
    pub source: Source,
    /// Picker or document scanner.
    pub mode: CaptureMode,
    /// Media kinds the surface should offer. Never empty; defaults to
    /// still images.
    pub media_types: Vec<MediaType>,
}

/// The one terminal event a capture surface delivers.
#[derive(Debug)]
pub enum CaptureEvent {
    /// The user picked or captured an image. An empty payload is treated
    /// as a missing image by the flow.
    Captured(ImageData),
    /// The surface finished with nothing to deliver, e.g. a document scan
    /// that ended with zero pages.
    NoResult,
    /// The user dismissed the surface without picking anything.
    Cancelled,
    /// The surface itself failed; the error is passed through to the
    /// caller unchanged.
    Failed(SurfaceError),
}

/// A presented capture UI that yields exactly one terminal event.
///
/// The flow presents the surface's [`handle`](Self::handle) through the
/// host and then awaits [`next_event`](Self::next_event). Returning `None`
/// means the surface disappeared without reporting — the flow classifies
/// that as an internal error rather than hanging forever.
#[async_trait]
pub trait CaptureSurface: Send {
    /// Handle the host uses to show this surface.
    fn handle(&self) -> UiHandle;

    /// Waits for the surface's terminal event. Called until it yields
    /// `Some` once; after that the surface is spent.
    async fn next_event(&mut self) -> Option<CaptureEvent>;
}

/// Builds capture surfaces and answers platform capability queries.
///
/// Splitting creation from the surface itself keeps surface construction
/// inside the flow (the surface must not exist before the flow decides to
/// present it) while the provider outlives individual flows.
pub trait CaptureSurfaceProvider: Send {
    /// The surface type this provider builds.
    type Surface: CaptureSurface;

    /// Whether the platform can serve `source` in `mode` at all. A
    /// document-scanner flow needs both the scanner and the camera to be
    /// available.
    fn supports(&self, source: Source, mode: CaptureMode) -> bool;

    /// Builds a surface for the given request. Only called after
    /// [`supports`](Self::supports) returned `true` and authorization was
    /// granted.
    fn create(&mut self, request: &CaptureRequest) -> Self::Surface;
}
