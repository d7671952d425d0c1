use std::fmt;

use crate::screen::PrePermissionScreen;
use crate::source::{CaptureMode, MediaType};

/// What a `Close` tap on the pre-permission screen resolves as.
///
/// The two known deployments of this pattern disagreed on the semantics,
/// so it is a policy choice rather than a fixed contract. The default
/// treats `Close` like any other user dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosePolicy {
    /// `Close` resolves as [`FlowError::CancelledByUser`](crate::FlowError::CancelledByUser).
    #[default]
    Cancelled,
    /// `Close` resolves as [`FlowError::PermissionDenied`](crate::FlowError::PermissionDenied),
    /// for callers that want "walked away" and "refused" to look the same.
    Denied,
}

/// Per-invocation configuration for a picking flow.
///
/// Built by chaining, mirroring how the flow is started:
///
/// ```
/// use picker_flow::{FlowOptions, MediaType};
///
/// let options = FlowOptions::new()
///     .document_scanner(true)
///     .accept(MediaType::Image);
/// assert!(options.use_document_scanner());
/// ```
pub struct FlowOptions {
    pre_permission: Option<Box<dyn PrePermissionScreen>>,
    document_scanner: bool,
    media_types: Vec<MediaType>,
    close_policy: ClosePolicy,
}

impl FlowOptions {
    /// Default options: plain picker, still images only, no pre-permission
    /// screen, `Close` treated as cancellation.
    pub fn new() -> Self {
        Self {
            pre_permission: None,
            document_scanner: false,
            media_types: vec![MediaType::Image],
            close_policy: ClosePolicy::default(),
        }
    }

    /// Supplies a custom screen to show before the OS permission prompt
    /// (and in place of an immediate failure when access was already
    /// denied, so the user can be routed to settings).
    pub fn with_pre_permission(mut self, screen: impl PrePermissionScreen + 'static) -> Self {
        self.pre_permission = Some(Box::new(screen));
        self
    }

    /// Uses the document-scanner surface instead of the plain camera.
    /// Ignored for library flows.
    pub fn document_scanner(mut self, enabled: bool) -> Self {
        self.document_scanner = enabled;
        self
    }

    /// Adds a media kind to the accepted set, deduplicating repeats.
    pub fn accept(mut self, media: MediaType) -> Self {
        if !self.media_types.contains(&media) {
            self.media_types.push(media);
        }
        self
    }

    /// Replaces the accepted media kinds. An empty set falls back to
    /// still images.
    pub fn media_types(mut self, types: Vec<MediaType>) -> Self {
        self.media_types = if types.is_empty() {
            vec![MediaType::Image]
        } else {
            types
        };
        self
    }

    /// Chooses how a `Close` tap on the pre-permission screen resolves.
    pub fn close_policy(mut self, policy: ClosePolicy) -> Self {
        self.close_policy = policy;
        self
    }

    /// Whether the alternate (document-scanner) capture surface was
    /// requested.
    pub fn use_document_scanner(&self) -> bool {
        self.document_scanner
    }

    /// The accepted media kinds. Never empty.
    pub fn accepted_media(&self) -> &[MediaType] {
        &self.media_types
    }

    /// The configured `Close` semantics.
    pub fn on_close(&self) -> ClosePolicy {
        self.close_policy
    }

    pub(crate) fn capture_mode(&self) -> CaptureMode {
        if self.document_scanner {
            CaptureMode::DocumentScanner
        } else {
            CaptureMode::Picker
        }
    }

    /// Whether a pre-permission screen was supplied.
    pub fn has_pre_permission(&self) -> bool {
        self.pre_permission.is_some()
    }

    pub(crate) fn take_pre_permission(&mut self) -> Option<Box<dyn PrePermissionScreen>> {
        self.pre_permission.take()
    }
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FlowOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowOptions")
            .field("pre_permission", &self.pre_permission.is_some())
            .field("document_scanner", &self.document_scanner)
            .field("media_types", &self.media_types)
            .field("close_policy", &self.close_policy)
            .finish()
    }
}
