//! Permission-gated media picking flows with single-resolution semantics.
//!
//! This crate orchestrates one picking attempt against a consent-gated
//! media source (camera or photo library):
//! - **Permission first**: the current authorization state is inspected
//!   fresh, an optional custom pre-permission screen is shown, and the
//!   OS-level prompt is requested only when warranted
//! - **One outcome**: every flow resolves exactly once, with an image or a
//!   typed [`FlowError`] — never zero times, never twice
//! - **Clean teardown**: any UI the flow presented is dismissed (and the
//!   dismissal acknowledged) before the outcome is emitted
//!
//! # Core Types
//!
//! - [`PickerFlow`]: per-invocation flow controller; `start` consumes it
//! - [`FlowOptions`]: chainable per-invocation configuration
//! - [`FlowError`] / [`FlowOutcome`]: the failure taxonomy and result type
//! - [`ImageData`]: opaque payload handle that keeps bytes out of logs
//! - [`PermissionGateway`], [`PresentationHost`], [`CaptureSurfaceProvider`],
//!   [`PrePermissionScreen`]: the collaborator seams platform adapters fill in
//!
//! # Examples
//!
//! ```no_run
//! use picker_flow::{FlowOptions, PickerFlow, Source};
//!
//! # async fn demo(
//! #     gateway: impl picker_flow::PermissionGateway,
//! #     host: impl picker_flow::PresentationHost,
//! #     provider: impl picker_flow::CaptureSurfaceProvider,
//! # ) {
//! let mut flow = PickerFlow::new(gateway, host, provider);
//! let mut diagnostics = flow.event_stream();
//!
//! let outcome = flow.start(Source::Camera, FlowOptions::new()).await;
//! match outcome {
//!     Ok(image) => println!("captured {} bytes", image.len()),
//!     Err(err) => eprintln!("flow failed: {err}"),
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod events;
mod flow;
mod gateway;
mod host;
mod image;
mod options;
mod screen;
mod source;
mod surface;

pub use error::{FlowError, FlowOutcome, SurfaceError};
pub use events::{FlowEvent, FlowState};
pub use flow::PickerFlow;
pub use gateway::PermissionGateway;
pub use host::{PresentationHost, UiHandle};
pub use image::ImageData;
pub use options::{ClosePolicy, FlowOptions};
pub use screen::PrePermissionScreen;
pub use source::{AuthorizationState, CaptureMode, MediaType, PermissionAction, Source};
pub use surface::{CaptureEvent, CaptureRequest, CaptureSurface, CaptureSurfaceProvider};
