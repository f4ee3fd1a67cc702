use thiserror::Error;

/// Input rejected by one of the checked intersection routines.
///
/// The unchecked routines never produce this; they follow the floating-point
/// division and return infinite or NaN coordinates instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum GeometryError {
    #[error("line is parallel to the plane or lies in it")]
    ParallelLine,
    #[error("plane normals are linearly dependent")]
    DependentNormals,
}

pub type Result<T> = std::result::Result<T, GeometryError>;
