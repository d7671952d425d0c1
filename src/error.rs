use thiserror::Error;

use crate::image::ImageData;

/// Boxed error reported by a capture surface and passed through unchanged.
pub type SurfaceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The single result a flow produces.
///
/// Every invocation of [`PickerFlow::start`](crate::PickerFlow::start)
/// resolves exactly once with either the selected image or a [`FlowError`].
pub type FlowOutcome = Result<ImageData, FlowError>;

/// Terminal failures a picking flow can resolve with.
///
/// Every failure path of the flow maps to exactly one variant; none are
/// retried internally. The caller decides what (if anything) to show the
/// user and may start a fresh flow afterwards.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The requested source or capture mode is not available on this
    /// platform (no camera, scanner unsupported, ...).
    #[error("requested source is not supported on this platform")]
    NotSupported,

    /// Authorization was refused, either up front by the OS state or by the
    /// user on the pre-permission screen or the OS prompt.
    #[error("permission for the requested source is missing")]
    PermissionDenied,

    /// The platform reported an authorization state this crate does not
    /// recognize. Defensive catch-all for future OS states.
    #[error("authorization state could not be interpreted")]
    UnknownPermissionState,

    /// The capture surface reported success but delivered no usable image
    /// payload.
    #[error("capture finished without a usable image")]
    ImageMissing,

    /// A document scan completed with zero pages.
    #[error("scan produced no pages")]
    EmptyScan,

    /// The user dismissed the capture surface or closed the pre-permission
    /// screen without picking anything.
    #[error("cancelled by the user")]
    CancelledByUser,

    /// Internal invariant violation: a collaborator went away without
    /// delivering its terminal event.
    #[error("flow ended without an outcome")]
    Unknown,

    /// An error reported by the capture surface itself, carried through
    /// unchanged.
    #[error("capture surface failed")]
    Surface(#[source] SurfaceError),
}

impl FlowError {
    /// Short stable tag for diagnostics; used by the event stream and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FlowError::NotSupported => "not_supported",
            FlowError::PermissionDenied => "permission_denied",
            FlowError::UnknownPermissionState => "unknown_permission_state",
            FlowError::ImageMissing => "image_missing",
            FlowError::EmptyScan => "empty_scan",
            FlowError::CancelledByUser => "cancelled_by_user",
            FlowError::Unknown => "unknown",
            FlowError::Surface(_) => "surface",
        }
    }
}
