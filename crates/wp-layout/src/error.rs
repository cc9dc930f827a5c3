//! Layout error types.

use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors raised while building a plate layout.
///
/// Configuration errors (`ParameterNotList`, `MalformedAxis`,
/// `ColorCountMismatch`) are rejected before any assignment happens;
/// `CapacityExceeded` is checked up front as well, so a failed build never
/// leaves a partially constructed layout behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Parameter '{name}' is not a list of values")]
    ParameterNotList { name: String },

    #[error("Axis '{axis}' spec '{token}' is neither a count nor a letter")]
    MalformedAxis { axis: &'static str, token: String },

    #[error("Color list has {got} entries but the layout has {expected} samples")]
    ColorCountMismatch { expected: usize, got: usize },

    #[error("Layout needs {needed} wells but the geometry only provides {available}")]
    CapacityExceeded { needed: usize, available: usize },

    #[error("Well '{label}' was assigned more than once")]
    DuplicateWell { label: String },

    #[error("Well label '{label}' has no numeric plate prefix")]
    MalformedLabel { label: String },
}
