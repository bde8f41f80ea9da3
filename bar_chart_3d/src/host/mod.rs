//! Render host module
//!
//! The seam between the deterministic scene and whatever draws it. A host
//! receives the scene once, follows viewport resizes and draws frames.
//! `RecordingHost` records calls for tests; `SvgSnapshotHost` rasterizes to
//! SVG without a GPU.

mod render_host;
mod recording_host;
mod svg_host;

pub use render_host::{FrameStats, RenderHost};
pub use recording_host::{HostCall, RecordingHost};
pub use svg_host::{SvgSnapshotHost, DEFAULT_AMBIENT};
