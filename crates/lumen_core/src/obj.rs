//! Wavefront OBJ loading.
//!
//! Only positions and faces are read. Faces are triangulated and every
//! model in the file is merged into a single [`TriangleMesh`] with flat
//! per-triangle normals.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lumen_math::Vec3;

use crate::error::{LoadError, LoadResult};
use crate::mesh::{index_base, TriangleMesh};
use crate::primitives::CullMode;

/// Load an OBJ file from disk into a triangle mesh.
pub fn load_obj<P: AsRef<Path>>(
    path: P,
    cull_mode: CullMode,
    material_index: usize,
) -> LoadResult<TriangleMesh> {
    let path = path.as_ref();
    log::info!("Loading mesh from: {:?}", path);

    let file = File::open(path)?;
    let mesh = parse_obj(&mut BufReader::new(file), cull_mode, material_index)?;

    log::info!(
        "Loaded {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Parse OBJ data from any buffered reader.
///
/// `mtllib` statements are ignored; materials come from the scene.
pub fn parse_obj<R: BufRead>(
    reader: &mut R,
    cull_mode: CullMode,
    material_index: usize,
) -> LoadResult<TriangleMesh> {
    let (models, _materials) = tobj::load_obj_buf(
        reader,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
        |_| Err(tobj::LoadError::GenericFailure),
    )?;

    if models.iter().all(|m| m.mesh.indices.is_empty()) {
        return Err(LoadError::NoModels);
    }

    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for model in &models {
        let base = index_base(positions.len(), model.mesh.positions.len() / 3)?;
        positions.extend(model.mesh.positions.chunks_exact(3).map(Vec3::from_slice));
        indices.extend(model.mesh.indices.iter().map(|&i| base + i));
    }

    Ok(TriangleMesh::new(positions, indices, cull_mode, material_index)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    const TWO_TRIANGLES: &str = "\
# two triangles sharing an edge
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
f 1 2 3
f 2 4 3
";

    #[test]
    fn test_parse_obj() {
        let mesh = parse_obj(&mut TWO_TRIANGLES.as_bytes(), CullMode::BackFace, 3).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.cull_mode, CullMode::BackFace);
        assert_eq!(mesh.material_index, 3);

        // 1-based face indices become 0-based
        assert_eq!(&mesh.indices()[..3], &[0, 1, 2]);

        // Counter-clockwise in XY seen from +Z gives a +Z normal
        for normal in mesh.normals() {
            assert!((*normal - Vec3::Z).length() < 1e-6);
        }
    }

    #[test]
    fn test_parse_obj_triangulates_quads() {
        let quad = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let mesh = parse_obj(&mut quad.as_bytes(), CullMode::None, 0).unwrap();

        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_parse_obj_without_faces() {
        let result = parse_obj(&mut "# nothing here\n".as_bytes(), CullMode::None, 0);
        assert!(matches!(result, Err(LoadError::NoModels)));
    }

    #[test]
    fn test_parse_obj_bad_index() {
        let bad = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n";
        let result = parse_obj(&mut bad.as_bytes(), CullMode::None, 0);
        assert!(matches!(
            result,
            Err(LoadError::Obj(_)) | Err(LoadError::Mesh(MeshError::IndexOutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_load_obj_from_file() {
        let path = std::env::temp_dir().join(format!("lumen_obj_test_{}.obj", std::process::id()));
        std::fs::write(&path, TWO_TRIANGLES).unwrap();

        let mesh = load_obj(&path, CullMode::None, 0);
        std::fs::remove_file(&path).ok();

        assert_eq!(mesh.unwrap().triangle_count(), 2);
    }

    #[test]
    fn test_load_obj_missing_file() {
        let result = load_obj("/definitely/not/here.obj", CullMode::None, 0);
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
