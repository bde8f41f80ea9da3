/*!
# Bar Chart 3D

Scene builder for a 4×4 three-dimensional bar chart.

Sixteen data records become sixteen colored boxes whose heights encode each
record's `age`. The chart stands on a disk, is framed by three axis lines,
is lit by two point lights and comes with an orbit camera configuration.
Drawing is delegated to a render host.

## Architecture

- **DataSource / Record**: the static records the chart is built from
- **ChartScene**: boxes, disk, axis lines and lights, addressable by name
- **CameraConfig / Camera**: orbit configuration and the live perspective camera
- **Geometry / Material / Mesh**: renderable data derived from scene primitives
- **RenderHost**: the drawing seam (`RecordingHost`, `SvgSnapshotHost`)
- **Viewer**: composition root owning scene, camera and host
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod data;
pub mod scene;
pub mod camera;
pub mod resource;
pub mod host;
pub mod viewer;

// Main barchart3d namespace module
pub mod barchart3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Composition root
    pub use crate::viewer::Viewer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Data sub-module
    pub mod data {
        pub use crate::data::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Render host sub-module
    pub mod host {
        pub use crate::host::*;
    }
}

// Re-export math library at crate root
pub use glam;
