//! Triangle mesh geometry with a per-instance transform.
//!
//! A mesh keeps its buffers in local space and caches their world-space
//! counterparts together with a world AABB. Every transform setter rebuilds
//! the cache before returning, so intersection queries never see stale data.

use lumen_math::{Aabb, Mat4, Mat4Ext, Quat, Vec3};

use crate::error::MeshError;
use crate::primitives::{face_normal, CullMode, Triangle};

/// Transform components that can be composed into a matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation
    pub translation: Vec3,

    /// Rotation (as quaternion)
    pub rotation: Quat,

    /// Scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Convert to a 4x4 transformation matrix.
    ///
    /// Order: Scale -> Rotate -> Translate (SRT)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// An indexed triangle list with flat per-triangle normals.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    /// One normal per triangle, local space
    normals: Vec<Vec3>,

    transform: Transform,
    transformed_positions: Vec<Vec3>,
    transformed_normals: Vec<Vec3>,

    local_bounds: Aabb,
    world_bounds: Aabb,

    pub cull_mode: CullMode,
    pub material_index: usize,
}

impl TriangleMesh {
    /// Build a mesh from positions and a triangle index list.
    ///
    /// Flat normals are derived from the declared winding order.
    pub fn new(
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Result<Self, MeshError> {
        validate_indices(&indices, positions.len())?;

        let normals = indices
            .chunks_exact(3)
            .map(|tri| {
                face_normal(
                    positions[tri[0] as usize],
                    positions[tri[1] as usize],
                    positions[tri[2] as usize],
                )
            })
            .collect();

        Ok(Self::from_parts(positions, indices, normals, cull_mode, material_index))
    }

    /// Build a mesh with caller-supplied per-triangle normals.
    pub fn with_normals(
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        normals: Vec<Vec3>,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Result<Self, MeshError> {
        validate_indices(&indices, positions.len())?;

        let expected = indices.len() / 3;
        if normals.len() != expected {
            return Err(MeshError::NormalCountMismatch {
                expected,
                actual: normals.len(),
            });
        }

        let normals = normals.into_iter().map(Vec3::normalize_or_zero).collect();
        Ok(Self::from_parts(positions, indices, normals, cull_mode, material_index))
    }

    /// An empty mesh that triangles can be appended to.
    pub fn empty(cull_mode: CullMode, material_index: usize) -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new(), cull_mode, material_index)
    }

    fn from_parts(
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        normals: Vec<Vec3>,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Self {
        let mut mesh = Self {
            local_bounds: Aabb::from_point_cloud(&positions),
            positions,
            indices,
            normals,
            transform: Transform::default(),
            transformed_positions: Vec::new(),
            transformed_normals: Vec::new(),
            world_bounds: Aabb::EMPTY,
            cull_mode,
            material_index,
        };
        mesh.update_transforms();
        mesh
    }

    /// Append a standalone triangle (in local space) to this mesh.
    ///
    /// The triangle keeps its own normal; its cull mode and material are
    /// ignored in favour of the mesh's.
    pub fn append_triangle(&mut self, triangle: &Triangle) -> Result<(), MeshError> {
        let start = index_base(self.positions.len(), 3)?;
        self.positions.extend_from_slice(&triangle.vertices());
        self.indices.extend_from_slice(&[start, start + 1, start + 2]);
        self.normals.push(triangle.normal);

        self.local_bounds = Aabb::from_point_cloud(&self.positions);
        self.update_transforms();
        Ok(())
    }

    /// Set the translation component.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.transform.translation = translation;
        self.update_transforms();
    }

    /// Set the rotation component to a rotation of `yaw` radians about +Y.
    pub fn set_rotation_y(&mut self, yaw: f32) {
        self.transform.rotation = Quat::from_rotation_y(yaw);
        self.update_transforms();
    }

    /// Set the scale component.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
        self.update_transforms();
    }

    /// Recompute world positions, world normals and the world AABB.
    fn update_transforms(&mut self) {
        let world = self.transform.to_matrix();
        // Inverse transpose keeps normals perpendicular under non-uniform scale.
        // A mirroring transform flips the winding, so the normals flip with it.
        let mut normal_matrix = world.inverse().transpose();
        if world.determinant() < 0.0 {
            normal_matrix = -normal_matrix;
        }

        self.transformed_positions.clear();
        self.transformed_positions
            .extend(self.positions.iter().map(|&p| world.transform_point3(p)));

        self.transformed_normals.clear();
        self.transformed_normals.extend(
            self.normals
                .iter()
                .map(|&n| normal_matrix.transform_vector3(n).normalize_or_zero()),
        );

        self.world_bounds = if self.positions.is_empty() {
            Aabb::EMPTY
        } else {
            world.transform_aabb(&self.local_bounds)
        };

        log::debug!(
            "Updated mesh transform: {} triangles, world bounds {:?} .. {:?}",
            self.triangle_count(),
            self.world_bounds.min(),
            self.world_bounds.max()
        );
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Per-triangle local normals.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn transformed_positions(&self) -> &[Vec3] {
        &self.transformed_positions
    }

    pub fn transformed_normals(&self) -> &[Vec3] {
        &self.transformed_normals
    }

    pub fn world_bounds(&self) -> &Aabb {
        &self.world_bounds
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// The `i`-th triangle in world space, carrying the mesh cull mode and material.
    pub fn world_triangle(&self, i: usize) -> Triangle {
        let tri = &self.indices[i * 3..i * 3 + 3];
        Triangle::with_normal(
            self.transformed_positions[tri[0] as usize],
            self.transformed_positions[tri[1] as usize],
            self.transformed_positions[tri[2] as usize],
            self.transformed_normals[i],
            self.cull_mode,
            self.material_index,
        )
    }

    /// Iterate all triangles in world space.
    pub fn world_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.triangle_count()).map(move |i| self.world_triangle(i))
    }
}

/// First index of `added` vertices appended after `vertex_count` existing ones.
pub(crate) fn index_base(vertex_count: usize, added: usize) -> Result<u32, MeshError> {
    let total = vertex_count
        .checked_add(added)
        .ok_or(MeshError::TooManyVertices(usize::MAX))?;
    if u32::try_from(total).is_err() {
        return Err(MeshError::TooManyVertices(total));
    }
    u32::try_from(vertex_count).map_err(|_| MeshError::TooManyVertices(total))
}

fn validate_indices(indices: &[u32], vertex_count: usize) -> Result<(), MeshError> {
    if indices.len() % 3 != 0 {
        return Err(MeshError::IndexCountNotMultipleOfThree(indices.len()));
    }

    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(MeshError::IndexOutOfBounds {
            index,
            vertex_count,
        });
    }

    Ok(())
}
