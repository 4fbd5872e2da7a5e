//! Error types for scene population and mesh loading.
//!
//! Ray queries never fail; these errors only surface while a scene is
//! being built.

use thiserror::Error;

/// Malformed triangle mesh buffers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("index buffer length {0} is not a multiple of 3")]
    IndexCountNotMultipleOfThree(usize),

    #[error("index {index} is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    #[error("expected {expected} per-triangle normals, got {actual}")]
    NormalCountMismatch { expected: usize, actual: usize },

    #[error("{0} vertices exceed the 32-bit index range")]
    TooManyVertices(usize),
}

/// Errors that can occur while loading mesh data from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("No triangles found in OBJ file")]
    NoModels,

    #[error("Invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

/// Errors raised while populating a [`crate::Scene`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("material index {index} does not exist ({count} materials)")]
    UnknownMaterial { index: usize, count: usize },

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("no mesh with index {0}")]
    UnknownMesh(usize),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for scene population.
pub type SceneResult<T> = Result<T, SceneError>;
