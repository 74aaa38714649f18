use crate::shape::{Capability, ShapeKind};

#[derive(Debug, thiserror::Error)]
pub enum GraphicsError {
    #[error("unknown color name: {0:?}")]
    UnknownColor(String),

    #[error("invalid hex color: {0:?} (expected #RRGGBB)")]
    InvalidHex(String),

    #[error("degenerate coordinates ({xmin}, {ymin}) .. ({xmax}, {ymax}): both spans must be non-zero")]
    DegenerateCoords {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },

    #[error("shape is not drawn in any window")]
    NotDrawn,

    #[error("{kind} does not support {capability}")]
    Unsupported {
        kind: ShapeKind,
        capability: Capability,
    },

    #[error("no graphics frontend is running; open windows from inside zgraphics::run")]
    NoFrontend,

    #[error("the graphics frontend has shut down")]
    FrontendGone,

    #[error("frontend error: {0}")]
    Frontend(String),
}

pub type Result<T> = std::result::Result<T, GraphicsError>;
