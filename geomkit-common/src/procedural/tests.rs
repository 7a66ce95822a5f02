//! Tests for procedural generators

use glam::Vec3;

use super::*;
use crate::error::GenerateError;
use crate::math::triangle_normal;
use crate::topology::{PrimitiveMode, expand_triangles};

fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).length() < eps
}

/// Every non-degenerate triangle of a strip or fan range faces the same way
/// as the summed normals of its vertices
fn assert_faces_agree_with_normals(
    vertices: &[MeshVertex],
    mode: PrimitiveMode,
    first: usize,
    count: usize,
    label: &str,
) {
    let indices: Vec<u32> = (first as u32..(first + count) as u32).collect();
    let mut checked = 0;
    for [a, b, c] in expand_triangles(mode, &indices) {
        let [va, vb, vc] = [a, b, c].map(|i| vertices[i as usize]);
        let face = triangle_normal(va.position_vec(), vb.position_vec(), vc.position_vec());
        if face == Vec3::ZERO {
            continue;
        }
        let stored = va.normal_vec() + vb.normal_vec() + vc.normal_vec();
        assert!(
            face.dot(stored) > 0.0,
            "{label}: triangle ({a}, {b}, {c}) faces away from its normals"
        );
        checked += 1;
    }
    assert!(checked > 0, "{label}: no triangles checked");
}

// ============================================================================
// Sphere
// ============================================================================

#[test]
fn test_sphere_vertex_count() {
    let sphere = sphere_vertices(4, 4).unwrap();
    assert_eq!(sphere.len(), 25);
    let flat: &[f32] = bytemuck::cast_slice(&sphere);
    assert_eq!(flat.len(), 125);
}

#[test]
fn test_sphere_starts_at_south_pole() {
    let sphere = sphere_vertices(4, 4).unwrap();
    assert!(approx(Vec3::from_array(sphere[0].position), Vec3::NEG_Y, 1e-6));
    assert!(approx(Vec3::from_array(sphere[24].position), Vec3::Y, 1e-6));
    assert_eq!(sphere[0].uv, [1.0, 0.0]);
    assert_eq!(sphere[24].uv, [0.0, 1.0]);
}

#[test]
fn test_sphere_points_on_unit_sphere() {
    for v in sphere_vertices(12, 7).unwrap() {
        let len = Vec3::from_array(v.position).length();
        assert!((len - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_sphere_rejects_zero_subdivision() {
    assert_eq!(
        sphere_vertices(0, 4),
        Err(GenerateError::ZeroSubdivision {
            shape: "sphere",
            param: "slices"
        })
    );
    assert!(sphere_vertices(4, 0).is_err());
}

// ============================================================================
// Torus
// ============================================================================

#[test]
fn test_torus_outer_equator() {
    let torus = torus_vertices(8, 6, 0.5).unwrap();
    assert_eq!(torus.len(), 9 * 7);
    // theta = 0, phi = 0: outermost point on +X
    assert!(approx(torus[0].position_vec(), Vec3::X, 1e-6));
    assert!(approx(torus[0].normal_vec(), Vec3::X, 1e-6));
}

#[test]
fn test_torus_normals_point_away_from_tube_centre() {
    let radius = 0.3;
    for v in torus_vertices(10, 8, radius).unwrap() {
        let p = v.position_vec();
        let n = v.normal_vec();
        assert!((n.length() - 1.0).abs() < 1e-5);

        let ring = Vec3::new(p.x, 0.0, p.z).normalize() * (1.0 - radius);
        let to_surface = p - ring;
        assert!((to_surface.length() - radius).abs() < 1e-5);
        assert!(approx(to_surface / radius, n, 1e-4));
    }
}

#[test]
fn test_torus_rejects_bad_radius() {
    assert_eq!(torus_vertices(4, 4, 0.0), Err(GenerateError::TorusRadius(0.0)));
    assert!(torus_vertices(4, 4, 1.5).is_err());
    assert!(torus_vertices(4, 4, f32::NAN).is_err());
    assert!(torus_vertices(4, 4, 1.0).is_ok());
}

// ============================================================================
// Grid and heightmap normals
// ============================================================================

#[test]
fn test_flat_grid_layout() {
    let grid = grid2d_vertices(3, 2, None).unwrap();
    assert_eq!(grid.len(), 6);
    assert_eq!(grid[0].position, [-1.0, 0.0, -1.0]);
    assert_eq!(grid[1].position, [0.0, 0.0, -1.0]);
    assert_eq!(grid[5].position, [1.0, 0.0, 1.0]);
    assert_eq!(grid[5].uv, [1.0, 1.0]);
    assert!(grid.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
}

#[test]
fn test_constant_heightmap_normals_point_up() {
    for (w, h) in [(2, 2), (2, 5), (3, 4), (5, 5), (10, 3)] {
        let heightmap = vec![0.3f32; (w * h) as usize];
        let grid = grid2d_vertices(w, h, Some(heightmap.as_slice())).unwrap();
        for (k, v) in grid.iter().enumerate() {
            assert!((v.position[1] + 0.4).abs() < 1e-6);
            assert!(
                approx(v.normal_vec(), Vec3::Y, 1e-5),
                "{w}x{h} vertex {k}: {:?}",
                v.normal
            );
        }
    }
}

#[test]
fn test_sloped_heightmap_normals_follow_slope() {
    let (w, h) = (6u32, 4u32);
    let heightmap: Vec<f32> = (0..h)
        .flat_map(|_| (0..w).map(|j| 0.1 * j as f32))
        .collect();
    let grid = grid2d_vertices(w, h, Some(heightmap.as_slice())).unwrap();

    // dy/dx of the plane
    let slope = 0.1 * (w - 1) as f32;
    let expected = Vec3::new(-slope, 1.0, 0.0).normalize();
    for (k, v) in grid.iter().enumerate() {
        assert!(
            approx(v.normal_vec(), expected, 1e-4),
            "vertex {k}: {:?}",
            v.normal
        );
    }
}

#[test]
fn test_heightmap_size_mismatch() {
    let heightmap = vec![0.0f32; 5];
    assert_eq!(
        grid2d_vertices(2, 3, Some(heightmap.as_slice())),
        Err(GenerateError::HeightmapSize {
            expected: 6,
            actual: 5
        })
    );
    assert!(grid2d_vertices(1, 3, None).is_err());
}

// ============================================================================
// Fans, strips and fixed shapes
// ============================================================================

#[test]
fn test_buffer_sizes() {
    for s in [1u32, 3, 16] {
        let su = s as usize;
        let floats = |v: Vec<MeshVertex>| v.len() * 8;
        assert_eq!(floats(cone_vertices(s, false).unwrap()), 16 * (su + 1));
        assert_eq!(floats(cone_vertices(s, true).unwrap()), 16 * (su + 1) + 8 * (su + 2));
        assert_eq!(floats(fan_cone_vertices(s, false).unwrap()), 8 * (su + 2));
        assert_eq!(floats(fan_cone_vertices(s, true).unwrap()), 16 * (su + 2));
        assert_eq!(floats(cylinder_vertices(s, false).unwrap()), 16 * (su + 1));
        assert_eq!(floats(cylinder_vertices(s, true).unwrap()), 16 * (su + 1) + 16 * (su + 2));
        assert_eq!(floats(disk_vertices(s).unwrap()), 8 * (su + 2));
        assert_eq!(floats(teapot_vertices(s).unwrap()), 8 * (49 * su + 1));
    }
    assert_eq!(quad_vertices().len(), 4);
    assert_eq!(cube_vertices().len(), 24);
}

#[test]
fn test_vertex_counts_past_u32_are_rejected() {
    let too_large = |shape| Some(GenerateError::TooLarge { shape });

    assert_eq!(sphere_vertices(70_000, 70_000).err(), too_large("sphere"));
    assert_eq!(torus_vertices(u32::MAX, 1, 0.5).err(), too_large("torus"));
    assert_eq!(grid2d_vertices(70_000, 70_000, None).err(), too_large("grid"));
    assert_eq!(teapot_vertices(u32::MAX / 10).err(), too_large("teapot"));
    assert_eq!(cone_vertices(u32::MAX / 2, false).err(), too_large("cone"));
    assert_eq!(fan_cone_vertices(u32::MAX / 2, true).err(), too_large("fan cone"));
    assert_eq!(cylinder_vertices(u32::MAX / 4, true).err(), too_large("cylinder"));
    assert_eq!(disk_vertices(u32::MAX).err(), too_large("disk"));

    // Bad parameters are reported ahead of sizes
    assert_eq!(
        torus_vertices(u32::MAX, 1, 2.0),
        Err(GenerateError::TorusRadius(2.0))
    );
}

#[test]
fn test_cube_faces_wind_outward() {
    let cube = cube_vertices();
    for face in 0..6 {
        assert_faces_agree_with_normals(
            &cube,
            PrimitiveMode::TriangleStrip,
            face * 4,
            4,
            "cube",
        );
    }
    assert_faces_agree_with_normals(&QUAD, PrimitiveMode::TriangleStrip, 0, 4, "quad");
}

#[test]
fn test_cone_faces_wind_outward() {
    let s = 12;
    let lateral = 2 * (s + 1);
    let cone = cone_vertices(s as u32, true).unwrap();
    assert_faces_agree_with_normals(&cone, PrimitiveMode::TriangleStrip, 0, lateral, "cone side");
    assert_faces_agree_with_normals(&cone, PrimitiveMode::TriangleFan, lateral, s + 2, "cone base");

    let fan_cone = fan_cone_vertices(s as u32, true).unwrap();
    assert_faces_agree_with_normals(&fan_cone, PrimitiveMode::TriangleFan, 0, s + 2, "fan cone");
    assert_faces_agree_with_normals(
        &fan_cone,
        PrimitiveMode::TriangleFan,
        s + 2,
        s + 2,
        "fan cone base",
    );
}

#[test]
fn test_cylinder_faces_wind_outward() {
    let s = 9;
    let lateral = 2 * (s + 1);
    let cylinder = cylinder_vertices(s as u32, true).unwrap();
    assert_faces_agree_with_normals(&cylinder, PrimitiveMode::TriangleStrip, 0, lateral, "side");
    assert_faces_agree_with_normals(&cylinder, PrimitiveMode::TriangleFan, lateral, s + 2, "top");
    assert_faces_agree_with_normals(
        &cylinder,
        PrimitiveMode::TriangleFan,
        lateral + s + 2,
        s + 2,
        "bottom",
    );

    // Side normals follow the cone slant, shared by each top/bottom pair
    let inv_sqrt5 = 1.0 / 5f32.sqrt();
    assert!(approx(
        cylinder[0].normal_vec(),
        Vec3::new(-2.0 * inv_sqrt5, inv_sqrt5, 0.0),
        1e-6
    ));
    for pair in cylinder[..lateral].chunks_exact(2) {
        assert_eq!(pair[0].normal, pair[1].normal);
        let [x, y, z] = pair[0].position;
        assert!(approx(
            pair[0].normal_vec(),
            Vec3::new(2.0 * x, 1.0, 2.0 * z) * inv_sqrt5,
            1e-5
        ));
        assert!((y - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_disk_fan_faces_up() {
    let disk = disk_vertices(5).unwrap();
    assert_faces_agree_with_normals(&disk, PrimitiveMode::TriangleFan, 0, 7, "disk");
    assert_eq!(disk[0].uv, [0.5, 0.5]);
    assert_eq!(disk[1].uv, [1.0, 0.5]);
}

#[test]
fn test_rim_texture_coordinates_on_square_border() {
    // 30 slices keep every rim angle off the quarter boundaries
    for v in &disk_vertices(30).unwrap()[1..] {
        let [u, t] = v.uv;
        assert!((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&t));
        assert!(u == 0.0 || u == 1.0 || t == 0.0 || t == 1.0);
    }
}

// ============================================================================
// Teapot
// ============================================================================

/// Signed area in texture space of strip triangle `k`, using strip parity
fn strip_uv_area(vertices: &[MeshVertex], k: usize) -> f64 {
    let (a, b, c) = if k % 2 == 0 {
        (k, k + 1, k + 2)
    } else {
        (k + 1, k, k + 2)
    };
    let uv = |i: usize| vertices[i].uv.map(f64::from);
    let (pa, pb, pc) = (uv(a), uv(b), uv(c));
    (pb[0] - pa[0]) * (pc[1] - pa[1]) - (pb[1] - pa[1]) * (pc[0] - pa[0])
}

#[test]
fn test_teapot_winding_parity() {
    for slices in [1u32, 2, 3, 8, 15] {
        let teapot = teapot_vertices(slices).unwrap();
        let mut signs = [0i32; 2];

        for step in 0..slices as usize {
            // 48 ladder vertices per step, after the leading lid apex
            let start = 1 + TEAPOT_VERTICES_PER_SLICE * step;
            let mut step_sign = 0;
            for k in start..=start + 45 {
                let area = strip_uv_area(&teapot, k);
                if area.abs() < 1e-9 {
                    continue;
                }
                let sign = area.signum() as i32;
                if step_sign == 0 {
                    step_sign = sign;
                }
                assert_eq!(sign, step_sign, "slices {slices} step {step} triangle {k}");
            }
            assert_ne!(step_sign, 0);

            let parity = step % 2;
            if signs[parity] == 0 {
                signs[parity] = step_sign;
            }
            assert_eq!(signs[parity], step_sign, "slices {slices} step {step}");
        }

        // Both sweep directions agree with each other too
        if slices > 1 {
            assert_eq!(signs[0], signs[1], "slices {slices}");
        }
    }
}

#[test]
fn test_teapot_closes_on_poles() {
    let teapot = teapot_vertices(4).unwrap();
    assert_eq!(teapot[0].position, [0.0, 0.394, 0.0]);
    // Even step closes on the bottom centre, odd on the lid apex
    assert_eq!(teapot[49].position, [0.0, -0.394, 0.0]);
    assert_eq!(teapot[98].position, [0.0, 0.394, 0.0]);
    assert_eq!(teapot[98].uv, [0.25, 0.0]);
}

#[test]
fn test_generators_are_deterministic() {
    assert_eq!(sphere_vertices(7, 5), sphere_vertices(7, 5));
    assert_eq!(torus_vertices(7, 5, 0.25), torus_vertices(7, 5, 0.25));
    assert_eq!(teapot_vertices(6), teapot_vertices(6));
    assert_eq!(cylinder_vertices(6, true), cylinder_vertices(6, true));
    let hm: Vec<f32> = (0..20).map(|i| (i as f32 * 0.37).sin() * 0.5 + 0.5).collect();
    assert_eq!(
        grid2d_vertices(5, 4, Some(hm.as_slice())),
        grid2d_vertices(5, 4, Some(hm.as_slice()))
    );
}
