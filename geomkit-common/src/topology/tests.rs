//! Tests for grid index topologies

use std::collections::BTreeSet;

use super::*;

const SIZES: [u32; 4] = [2, 3, 5, 10];

/// Triangles of a grid encoding, each rotated so its smallest index comes
/// first (winding is kept), dropping the zero-area triangles strips use to
/// turn corners
fn cell_triangles(level: OptimizationLevel, w: u32, h: u32) -> BTreeSet<[u32; 3]> {
    let grid = level.grid_indices(w, h).unwrap();
    let mut set = BTreeSet::new();
    for (count, offset) in grid.descriptor.rows() {
        let start = (offset / INDEX_ELEMENT_SIZE) as usize;
        let row = &grid.indices[start..start + count as usize];
        for tri in expand_triangles(grid.descriptor.mode, row) {
            if is_degenerate(tri, w) {
                continue;
            }
            set.insert(smallest_first(tri));
        }
    }
    set
}

fn smallest_first(mut tri: [u32; 3]) -> [u32; 3] {
    let min = (0..3).min_by_key(|&i| tri[i]).unwrap_or(0);
    tri.rotate_left(min);
    tri
}

fn is_degenerate([a, b, c]: [u32; 3], w: u32) -> bool {
    if a == b || b == c || a == c {
        return true;
    }
    let p = |i: u32| ((i % w) as i64, (i / w) as i64);
    let (pa, pb, pc) = (p(a), p(b), p(c));
    (pb.0 - pa.0) * (pc.1 - pa.1) - (pb.1 - pa.1) * (pc.0 - pa.0) == 0
}

// ============================================================================
// Descriptor and index count laws
// ============================================================================

#[test]
fn test_index_count_laws() {
    for w in SIZES {
        for h in SIZES {
            let cells = (w - 1) * (h - 1);
            let expected = [
                (PrimitiveMode::Triangles, 6 * cells, 1),
                (PrimitiveMode::TriangleStrip, 2 * w, h - 1),
                (PrimitiveMode::TriangleStrip, 2 * w * (h - 1), 1),
                (PrimitiveMode::TrianglesAdjacency, 12 * cells, 1),
                (PrimitiveMode::TriangleStripAdjacency, 4 * w, h - 1),
            ];
            for (level, (mode, per_row, rows)) in OptimizationLevel::ALL.into_iter().zip(expected) {
                let grid = level.grid_indices(w, h).unwrap();
                let d = grid.descriptor;
                assert_eq!(d.mode, mode, "level {level} {w}x{h}");
                assert_eq!(d.elements_per_row, per_row, "level {level} {w}x{h}");
                assert_eq!(d.row_count, rows, "level {level} {w}x{h}");
                assert_eq!(
                    grid.indices.len() as u32,
                    d.rows().map(|(count, _)| count).sum::<u32>(),
                    "level {level} {w}x{h}"
                );
            }
        }
    }
}

#[test]
fn test_indices_stay_in_range() {
    for level in OptimizationLevel::ALL {
        for w in SIZES {
            for h in SIZES {
                let grid = level.grid_indices(w, h).unwrap();
                let max = grid.indices.iter().copied().max().unwrap();
                assert!(max < w * h, "level {level} {w}x{h}: index {max} out of range");
            }
        }
    }
}

#[test]
fn test_descriptor_is_deterministic() {
    for level in OptimizationLevel::ALL {
        assert_eq!(level.grid_indices(7, 4), level.grid_indices(7, 4));
        assert_eq!(
            level.descriptor(7, 4).unwrap(),
            level.grid_indices(7, 4).unwrap().descriptor
        );
    }
}

#[test]
fn test_row_offsets_advance_by_row_bytes() {
    let d = OptimizationLevel::RowStrips.descriptor(5, 4).unwrap();
    let rows: Vec<_> = d.rows().collect();
    assert_eq!(rows, vec![(10, 0), (10, 40), (10, 80)]);
}

#[test]
fn test_grid_too_small() {
    for level in OptimizationLevel::ALL {
        assert_eq!(
            level.grid_indices(1, 5),
            Err(GenerateError::GridTooSmall { width: 1, height: 5 })
        );
        assert!(level.grid_indices(4, 0).is_err());
    }
}

#[test]
fn test_oversized_grids_are_rejected() {
    let too_large = Err(GenerateError::TooLarge { shape: "grid" });

    // 12 indices per cell overflow, checked before any index is emitted
    let adjacency = OptimizationLevel::TriangleListAdjacency;
    assert_eq!(adjacency.descriptor(20_000, 20_000), too_large);
    assert_eq!(
        adjacency.grid_indices(20_000, 20_000).map(|g| g.descriptor),
        too_large
    );

    // Row strips of the same grid still fit, up to the last byte offset
    let strips = OptimizationLevel::RowStrips.descriptor(20_000, 20_000).unwrap();
    assert_eq!(strips.byte_len(), Some(2 * 20_000 * 19_999 * 4));
    assert_eq!(strips.rows().last(), Some((40_000, 19_998 * 40_000 * 4)));

    // More vertices than a u32 index can address
    for level in OptimizationLevel::ALL {
        assert_eq!(level.descriptor(70_000, 70_000), too_large, "level {level}");
    }
}

#[test]
fn test_rows_stop_before_offsets_overflow() {
    let d = DrawDescriptor {
        mode: PrimitiveMode::Triangles,
        elements_per_row: u32::MAX / 2,
        row_count: 3,
    };
    assert_eq!(d.byte_len(), None);
    assert_eq!(d.total_elements(), u32::MAX);
    assert_eq!(d.rows().collect::<Vec<_>>(), vec![(u32::MAX / 2, 0)]);
}

// ============================================================================
// Encodings
// ============================================================================

#[test]
fn test_triangle_list_2x2() {
    let grid = OptimizationLevel::TriangleList.grid_indices(2, 2).unwrap();
    assert_eq!(grid.indices, vec![0, 2, 1, 1, 2, 3]);
}

#[test]
fn test_row_strips_3x3() {
    let grid = OptimizationLevel::RowStrips.grid_indices(3, 3).unwrap();
    assert_eq!(grid.indices, vec![0, 3, 1, 4, 2, 5, 3, 6, 4, 7, 5, 8]);
}

#[test]
fn test_single_strip_turns_back() {
    // Odd height: one forward/backward pair
    let grid = OptimizationLevel::SingleStrip.grid_indices(3, 3).unwrap();
    assert_eq!(grid.indices, vec![0, 3, 1, 4, 2, 5, 8, 5, 7, 4, 6, 3]);

    // Even height: the last band is a lone forward pass
    let grid = OptimizationLevel::SingleStrip.grid_indices(2, 4).unwrap();
    assert_eq!(grid.indices, vec![0, 2, 1, 3, 5, 3, 4, 2, 4, 6, 5, 7]);
}

#[test]
fn test_row_strips_adjacency_2x2() {
    let grid = OptimizationLevel::RowStripsAdjacency.grid_indices(2, 2).unwrap();
    // nnzw clamps to the last row on a single band
    assert_eq!(grid.indices, vec![0, 2, 2, 1, 1, 2, 3, 1]);
}

#[test]
fn test_triangle_list_adjacency_primary_vertices_match_list() {
    let list = OptimizationLevel::TriangleList.grid_indices(4, 3).unwrap();
    let adj = OptimizationLevel::TriangleListAdjacency.grid_indices(4, 3).unwrap();
    assert_eq!(
        expand_triangles(PrimitiveMode::Triangles, &list.indices),
        expand_triangles(PrimitiveMode::TrianglesAdjacency, &adj.indices)
    );
}

#[test]
fn test_all_levels_cover_the_same_cells() {
    for w in SIZES {
        for h in SIZES {
            // Same cells, same winding as the plain list
            let reference = cell_triangles(OptimizationLevel::TriangleList, w, h);
            assert_eq!(reference.len() as u32, 2 * (w - 1) * (h - 1));
            for level in OptimizationLevel::ALL {
                assert_eq!(
                    cell_triangles(level, w, h),
                    reference,
                    "level {level} differs on {w}x{h}"
                );
            }
        }
    }
}

// ============================================================================
// Primitive expansion
// ============================================================================

#[test]
fn test_expand_strip_alternates_winding() {
    let tris = expand_triangles(PrimitiveMode::TriangleStrip, &[0, 1, 2, 3, 4]);
    assert_eq!(tris, vec![[0, 1, 2], [2, 1, 3], [2, 3, 4]]);
}

#[test]
fn test_expand_fan() {
    let tris = expand_triangles(PrimitiveMode::TriangleFan, &[0, 1, 2, 3]);
    assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3]]);
    assert!(expand_triangles(PrimitiveMode::TriangleFan, &[]).is_empty());
}

#[test]
fn test_expand_strip_adjacency() {
    // Primary vertices 0, 2, 4, 6; adjacency in between
    let tris = expand_triangles(
        PrimitiveMode::TriangleStripAdjacency,
        &[0, 10, 2, 11, 4, 12, 6, 13],
    );
    assert_eq!(tris, vec![[0, 2, 4], [4, 2, 6]]);
}

// ============================================================================
// Optimization level conversions
// ============================================================================

#[test]
fn test_optimization_level_conversions() {
    assert_eq!(OptimizationLevel::default(), OptimizationLevel::RowStrips);
    for (n, level) in OptimizationLevel::ALL.into_iter().enumerate() {
        assert_eq!(OptimizationLevel::try_from(n as u32), Ok(level));
        assert_eq!(u32::from(level), n as u32);
    }
    assert_eq!(
        OptimizationLevel::try_from(5),
        Err(GenerateError::InvalidOptimizationLevel(5))
    );
}
