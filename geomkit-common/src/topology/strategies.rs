//! The five grid index strategies
//!
//! All strategies index the same row-major `w × h` vertex lattice and cover
//! the same `(w - 1) × (h - 1)` cells, each cell split along the diagonal
//! from `(x + 1, z)` to `(x, z + 1)`. They differ only in encoding.

use super::{DrawDescriptor, GridTopology, PrimitiveMode};

/// Disjoint triangle list, one draw
pub struct TriangleList;

/// One triangle strip per row band, `h - 1` draws
pub struct RowStrips;

/// One strip zig-zagging over all row bands, one draw
pub struct SingleStrip;

/// Triangle list with adjacency, one draw
pub struct TriangleListAdjacency;

/// One strip with adjacency per row band, `h - 1` draws
pub struct RowStripsAdjacency;

impl GridTopology for TriangleList {
    fn layout(&self, w: u32, h: u32) -> Option<DrawDescriptor> {
        Some(DrawDescriptor {
            mode: PrimitiveMode::Triangles,
            elements_per_row: cell_count(w, h)?.checked_mul(6)?,
            row_count: 1,
        })
    }

    fn emit(&self, w: u32, h: u32, out: &mut Vec<u32>) {
        for z in 0..h - 1 {
            let zw = z * w;
            let nzw = zw + w;
            for x in 0..w - 1 {
                let nx = x + 1;
                out.extend_from_slice(&[zw + x, nzw + x, zw + nx]);
                out.extend_from_slice(&[zw + nx, nzw + x, nzw + nx]);
            }
        }
    }
}

impl GridTopology for RowStrips {
    fn layout(&self, w: u32, h: u32) -> Option<DrawDescriptor> {
        Some(DrawDescriptor {
            mode: PrimitiveMode::TriangleStrip,
            elements_per_row: w.checked_mul(2)?,
            row_count: h - 1,
        })
    }

    fn emit(&self, w: u32, h: u32, out: &mut Vec<u32>) {
        for z in 0..h - 1 {
            push_forward_band(out, w, z);
        }
    }
}

impl GridTopology for SingleStrip {
    fn layout(&self, w: u32, h: u32) -> Option<DrawDescriptor> {
        Some(DrawDescriptor {
            mode: PrimitiveMode::TriangleStrip,
            elements_per_row: w.checked_mul(2)?.checked_mul(h - 1)?,
            row_count: 1,
        })
    }

    fn emit(&self, w: u32, h: u32, out: &mut Vec<u32>) {
        let even = h % 2 == 0;
        // Bands handled in forward/backward pairs; an even height leaves one over
        let paired = (h - 1) - u32::from(even);

        let mut z = 0;
        while z < paired {
            push_forward_band(out, w, z);

            // Back along the next band; the last column of the forward pass
            // and the first of this one form the degenerate turn
            let nzw = (z + 1) * w;
            let nnzw = nzw + w;
            for x in (0..w).rev() {
                out.extend_from_slice(&[nnzw + x, nzw + x]);
            }
            z += 2;
        }

        if even {
            push_forward_band(out, w, z);
        }
    }
}

impl GridTopology for TriangleListAdjacency {
    fn layout(&self, w: u32, h: u32) -> Option<DrawDescriptor> {
        Some(DrawDescriptor {
            mode: PrimitiveMode::TrianglesAdjacency,
            elements_per_row: cell_count(w, h)?.checked_mul(12)?,
            row_count: 1,
        })
    }

    fn emit(&self, w: u32, h: u32, out: &mut Vec<u32>) {
        let (wm1, hm1) = (w - 1, h - 1);
        for z in 0..hm1 {
            let zw = z * w;
            let pzw = z.saturating_sub(1) * w;
            let nzw = (z + 1) * w;
            let nnzw = (z + 2).min(hm1) * w;
            for x in 0..wm1 {
                let px = x.saturating_sub(1);
                let nx = x + 1;
                let nnx = (nx + 1).min(wm1);

                // (x, z) (x+1, z) (x, z+1) interleaved with their neighbours
                out.extend_from_slice(&[
                    zw + x,
                    nzw + px,
                    nzw + x,
                    nzw + nx,
                    zw + nx,
                    pzw + nx,
                ]);
                // (x+1, z) (x, z+1) (x+1, z+1)
                out.extend_from_slice(&[
                    zw + nx,
                    zw + x,
                    nzw + x,
                    nnzw + x,
                    nzw + nx,
                    zw + nnx,
                ]);
            }
        }
    }
}

impl GridTopology for RowStripsAdjacency {
    fn layout(&self, w: u32, h: u32) -> Option<DrawDescriptor> {
        Some(DrawDescriptor {
            mode: PrimitiveMode::TriangleStripAdjacency,
            elements_per_row: w.checked_mul(4)?,
            row_count: h - 1,
        })
    }

    fn emit(&self, w: u32, h: u32, out: &mut Vec<u32>) {
        let hm1 = h - 1;
        for z in 0..hm1 {
            let zw = z * w;
            let pzw = z.saturating_sub(1) * w;
            let nzw = zw + w;
            // Clamped so the last band's outer neighbours stay on the grid
            let nnzw = (z + 2).min(hm1) * w;

            // Left edge: the missing (-1, z + 1) neighbour repeats (0, z + 1)
            out.extend_from_slice(&[zw, nzw, nzw]);
            for x in 1..w {
                out.extend_from_slice(&[pzw + x, zw + x, nnzw + x - 1, nzw + x]);
            }
            // Right edge: the missing (w, z) neighbour repeats (w - 1, z)
            out.push(zw + w - 1);
        }
    }
}

/// Number of `(w - 1) × (h - 1)` grid cells
fn cell_count(w: u32, h: u32) -> Option<u32> {
    (w - 1).checked_mul(h - 1)
}

/// `(x, z), (x, z + 1)` for every column of band `z`
fn push_forward_band(out: &mut Vec<u32>, w: u32, z: u32) {
    let zw = z * w;
    let nzw = zw + w;
    for x in 0..w {
        out.extend_from_slice(&[zw + x, nzw + x]);
    }
}
