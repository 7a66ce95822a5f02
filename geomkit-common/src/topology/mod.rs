//! Index topologies for regular vertex grids
//!
//! A grid of `w × h` vertices can be drawn from several index encodings that
//! trade buffer size against draw-call count. The [`OptimizationLevel`]
//! picks one; its [`GridTopology`] strategy emits the index buffer together
//! with the [`DrawDescriptor`] needed to replay it.
//!
//! | level | strategy | primitive | elements per row | rows |
//! |---|---|---|---|---|
//! | 0 | [`TriangleList`] | triangles | `6(w-1)(h-1)` | 1 |
//! | 1 | [`RowStrips`] | strip | `2w` | `h-1` |
//! | 2 | [`SingleStrip`] | strip | `2w(h-1)` | 1 |
//! | 3 | [`TriangleListAdjacency`] | triangles + adjacency | `12(w-1)(h-1)` | 1 |
//! | 4 | [`RowStripsAdjacency`] | strip + adjacency | `4w` | `h-1` |

mod strategies;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

pub use strategies::{
    RowStrips, RowStripsAdjacency, SingleStrip, TriangleList, TriangleListAdjacency,
};

/// Size in bytes of one index element (`u32`)
pub const INDEX_ELEMENT_SIZE: u32 = std::mem::size_of::<u32>() as u32;

/// Primitive assembly mode of a draw call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveMode {
    Triangles,
    TriangleStrip,
    TriangleFan,
    TrianglesAdjacency,
    TriangleStripAdjacency,
}

impl PrimitiveMode {
    /// Short lowercase name, used in logs and CLI output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triangles => "triangles",
            Self::TriangleStrip => "triangle-strip",
            Self::TriangleFan => "triangle-fan",
            Self::TrianglesAdjacency => "triangles-adjacency",
            Self::TriangleStripAdjacency => "triangle-strip-adjacency",
        }
    }
}

impl fmt::Display for PrimitiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How to replay an index buffer as one or more indexed draws
///
/// Draw `r` (of `row_count`) reads `elements_per_row` indices starting at
/// byte offset `r * elements_per_row * INDEX_ELEMENT_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawDescriptor {
    pub mode: PrimitiveMode,
    pub elements_per_row: u32,
    pub row_count: u32,
}

impl DrawDescriptor {
    /// Total number of indices covered by all rows
    pub const fn total_elements(&self) -> u32 {
        self.elements_per_row.saturating_mul(self.row_count)
    }

    /// Size in bytes of the index range all rows cover, `None` past `u32`
    pub fn byte_len(&self) -> Option<u32> {
        self.elements_per_row
            .checked_mul(self.row_count)?
            .checked_mul(INDEX_ELEMENT_SIZE)
    }

    /// `(count, byte_offset)` of every draw, in order
    ///
    /// Stops at the first row whose offset would not fit in `u32`; a
    /// descriptor from [`GridTopology::descriptor`] never has one.
    pub fn rows(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let count = self.elements_per_row;
        (0..self.row_count).map_while(move |r| {
            let offset = r.checked_mul(count)?.checked_mul(INDEX_ELEMENT_SIZE)?;
            Some((count, offset))
        })
    }
}

/// Index buffer plus the draw descriptor that replays it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridIndices {
    pub indices: Vec<u32>,
    pub descriptor: DrawDescriptor,
}

/// An index encoding of a `w × h` vertex grid
///
/// Implementors may assume `w >= 2` and `h >= 2` with `w * h` fitting in
/// `u32`; [`GridTopology::descriptor`] checks that before calling them.
pub trait GridTopology {
    /// Draw layout for a `w × h` grid, `None` if a count overflows `u32`
    fn layout(&self, w: u32, h: u32) -> Option<DrawDescriptor>;

    /// Append the index buffer for a `w × h` grid to `out`
    fn emit(&self, w: u32, h: u32, out: &mut Vec<u32>);

    /// Validated draw descriptor for a `w × h` grid
    ///
    /// Every vertex index and every row's byte offset fits in `u32`.
    fn descriptor(&self, w: u32, h: u32) -> Result<DrawDescriptor, GenerateError> {
        if w < 2 || h < 2 {
            return Err(GenerateError::GridTooSmall {
                width: w,
                height: h,
            });
        }
        w.checked_mul(h)
            .and_then(|_| self.layout(w, h))
            .filter(|descriptor| descriptor.byte_len().is_some())
            .ok_or(GenerateError::TooLarge { shape: "grid" })
    }

    /// Validate the grid size and produce indices plus descriptor
    fn build(&self, w: u32, h: u32) -> Result<GridIndices, GenerateError> {
        let descriptor = self.descriptor(w, h)?;
        let mut indices = Vec::with_capacity(descriptor.total_elements() as usize);
        self.emit(w, h, &mut indices);
        debug_assert_eq!(indices.len(), descriptor.total_elements() as usize);
        Ok(GridIndices {
            indices,
            descriptor,
        })
    }
}

/// Grid index encoding, 0 through 4
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum OptimizationLevel {
    /// Disjoint triangle list
    TriangleList = 0,
    /// One strip per row band
    #[default]
    RowStrips = 1,
    /// One boustrophedon strip
    SingleStrip = 2,
    /// Triangle list with adjacency
    TriangleListAdjacency = 3,
    /// One strip with adjacency per row band
    RowStripsAdjacency = 4,
}

impl OptimizationLevel {
    /// All levels, in numeric order
    pub const ALL: [Self; 5] = [
        Self::TriangleList,
        Self::RowStrips,
        Self::SingleStrip,
        Self::TriangleListAdjacency,
        Self::RowStripsAdjacency,
    ];

    /// Strategy implementing this level
    pub fn strategy(self) -> &'static dyn GridTopology {
        match self {
            Self::TriangleList => &TriangleList,
            Self::RowStrips => &RowStrips,
            Self::SingleStrip => &SingleStrip,
            Self::TriangleListAdjacency => &TriangleListAdjacency,
            Self::RowStripsAdjacency => &RowStripsAdjacency,
        }
    }

    /// Indices and descriptor for a `w × h` grid at this level
    pub fn grid_indices(self, w: u32, h: u32) -> Result<GridIndices, GenerateError> {
        self.strategy().build(w, h)
    }

    /// Descriptor for a `w × h` grid at this level, without building indices
    pub fn descriptor(self, w: u32, h: u32) -> Result<DrawDescriptor, GenerateError> {
        self.strategy().descriptor(w, h)
    }
}

impl TryFrom<u32> for OptimizationLevel {
    type Error = GenerateError;

    fn try_from(level: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .get(level as usize)
            .copied()
            .ok_or(GenerateError::InvalidOptimizationLevel(level))
    }
}

impl From<OptimizationLevel> for u32 {
    fn from(level: OptimizationLevel) -> Self {
        level as u32
    }
}

impl fmt::Display for OptimizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u32::from(*self))
    }
}

/// Expand an index stream of any supported mode into plain triangles
///
/// Strips honour winding parity: odd triangles swap their first two
/// vertices. Adjacency modes keep only the primary (even-position)
/// vertices. Trailing indices that do not complete a primitive are ignored.
pub fn expand_triangles(mode: PrimitiveMode, indices: &[u32]) -> Vec<[u32; 3]> {
    match mode {
        PrimitiveMode::Triangles => indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect(),
        PrimitiveMode::TriangleStrip => strip_triangles(indices),
        PrimitiveMode::TriangleFan => match indices.split_first() {
            Some((&centre, rim)) => rim.windows(2).map(|e| [centre, e[0], e[1]]).collect(),
            None => Vec::new(),
        },
        PrimitiveMode::TrianglesAdjacency => indices
            .chunks_exact(6)
            .map(|c| [c[0], c[2], c[4]])
            .collect(),
        PrimitiveMode::TriangleStripAdjacency => {
            let primary: Vec<u32> = indices.iter().step_by(2).copied().collect();
            // A trailing unpaired primary vertex has no adjacency slot
            let usable = if indices.len() % 2 == 1 {
                &primary[..primary.len() - 1]
            } else {
                &primary[..]
            };
            strip_triangles(usable)
        }
    }
}

fn strip_triangles(indices: &[u32]) -> Vec<[u32; 3]> {
    indices
        .windows(3)
        .enumerate()
        .map(|(k, t)| {
            if k % 2 == 0 {
                [t[0], t[1], t[2]]
            } else {
                [t[1], t[0], t[2]]
            }
        })
        .collect()
}
