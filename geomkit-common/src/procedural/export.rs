//! Wavefront OBJ export

use std::io::{self, Write};

use crate::procedural::types::MeshVertex;

/// Write a triangle mesh as a Wavefront OBJ object named `name`
///
/// Emits one `v`, `vt` and `vn` line per vertex and one `f` line per
/// triangle. Triangle indices are 0-based into `vertices`; OBJ indices are
/// 1-based, and each face corner references the same position, texture and
/// normal index.
pub fn write_obj<W: Write>(
    out: &mut W,
    name: &str,
    vertices: &[MeshVertex],
    triangles: &[[u32; 3]],
) -> io::Result<()> {
    writeln!(out, "# geomkit")?;
    writeln!(out, "o {name}")?;

    for v in vertices {
        let [x, y, z] = v.position;
        writeln!(out, "v {x} {y} {z}")?;
    }
    for v in vertices {
        let [u, t] = v.uv;
        writeln!(out, "vt {u} {t}")?;
    }
    for v in vertices {
        let [x, y, z] = v.normal;
        writeln!(out, "vn {x} {y} {z}")?;
    }

    for tri in triangles {
        let [a, b, c] = tri.map(|i| i + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::QUAD;

    #[test]
    fn test_write_obj_quad() {
        let mut buf = Vec::new();
        write_obj(&mut buf, "quad", &QUAD, &[[0, 1, 2], [2, 1, 3]]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("o quad\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 4);
        assert!(text.contains("f 1/1/1 2/2/2 3/3/3\n"));
        assert!(text.contains("f 3/3/3 2/2/2 4/4/4\n"));
        assert!(text.contains("v -1 -1 0\n"));
    }

    #[test]
    fn test_write_obj_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad.obj");
        let mut file = std::fs::File::create(&path).unwrap();
        write_obj(&mut file, "quad", &QUAD, &[[0, 1, 2]]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 1);
    }
}
