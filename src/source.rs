use std::fmt;

/// The media-acquisition source a flow operates against.
///
/// Each source maps to its own permission domain and capture UI: the camera
/// needs capture-device authorization, the photo library needs read access
/// to the user's existing media. The source is fixed for the lifetime of a
/// flow invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Live capture through the device camera.
    Camera,
    /// Selection from the user's photo library.
    Library,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Camera => write!(f, "camera"),
            Source::Library => write!(f, "library"),
        }
    }
}

/// Which capture surface is used once permission is settled.
///
/// `DocumentScanner` is only meaningful for [`Source::Camera`]; a library
/// flow always uses the plain picker regardless of the requested mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureMode {
    /// The standard system picker (camera viewfinder or library grid).
    Picker,
    /// A document-scanner style surface that captures one or more pages.
    DocumentScanner,
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureMode::Picker => write!(f, "picker"),
            CaptureMode::DocumentScanner => write!(f, "document-scanner"),
        }
    }
}

/// Media kinds a capture surface may deliver.
///
/// The accepted set travels with the [`CaptureRequest`](crate::CaptureRequest)
/// so the surface can filter what it offers. Flows default to still images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Still images.
    Image,
    /// Video clips.
    Movie,
}

/// Authorization state for a source, as reported by the platform.
///
/// The state is queried fresh at the start of every flow and again after an
/// OS-level request; it is never cached across flows. `LimitedAuthorized`
/// (a partial grant, e.g. a user-curated photo selection) is treated
/// exactly like `Authorized` for flow purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorizationState {
    /// The user has not yet been asked.
    Undetermined,
    /// Full access granted.
    Authorized,
    /// Partial access granted; equivalent to `Authorized` here.
    LimitedAuthorized,
    /// The user explicitly refused access.
    Denied,
    /// Access is blocked by policy (parental controls, MDM) and the user
    /// cannot change it.
    Restricted,
    /// The platform reported a state this crate does not recognize.
    Unknown,
}

impl AuthorizationState {
    /// Whether this state permits presenting the capture surface.
    pub fn grants_access(self) -> bool {
        matches!(
            self,
            AuthorizationState::Authorized | AuthorizationState::LimitedAuthorized
        )
    }
}

impl fmt::Display for AuthorizationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizationState::Undetermined => write!(f, "undetermined"),
            AuthorizationState::Authorized => write!(f, "authorized"),
            AuthorizationState::LimitedAuthorized => write!(f, "limited"),
            AuthorizationState::Denied => write!(f, "denied"),
            AuthorizationState::Restricted => write!(f, "restricted"),
            AuthorizationState::Unknown => write!(f, "unknown"),
        }
    }
}

/// User choice on the pre-permission screen.
///
/// The screen emits exactly one terminal action per flow; `Settings` is the
/// one non-terminal action and may repeat before the user settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionAction {
    /// Proceed to the OS-level authorization request.
    Allow,
    /// Refuse; the flow fails with a permission error.
    DontAllow,
    /// Dismiss the screen without deciding.
    Close,
    /// Route to the OS settings app; the screen stays up.
    Settings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_counts_as_granted() {
        assert!(AuthorizationState::Authorized.grants_access());
        assert!(AuthorizationState::LimitedAuthorized.grants_access());
    }

    #[test]
    fn non_grants_are_refused() {
        for state in [
            AuthorizationState::Undetermined,
            AuthorizationState::Denied,
            AuthorizationState::Restricted,
            AuthorizationState::Unknown,
        ] {
            assert!(!state.grants_access(), "{state} must not grant access");
        }
    }

    #[test]
    fn display_is_lowercase_stable() {
        assert_eq!(Source::Camera.to_string(), "camera");
        assert_eq!(CaptureMode::DocumentScanner.to_string(), "document-scanner");
        assert_eq!(AuthorizationState::LimitedAuthorized.to_string(), "limited");
    }
}
