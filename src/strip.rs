//! Vertex data for the road surface, as one closed triangle strip.

use offset::OffsetCurves;
use util::{P2, P3, V3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripVertex {
    pub position: P3,
    pub tex_coord: P2,
    pub normal: V3,
}

/// Zig-zag between the left and right edges, going once round the loop and
/// repeating the first pair at the end to close it.
///
/// The texture is stretched across the road and repeats every two samples
/// along it.
pub fn road_strip(curves: &OffsetCurves) -> Vec<StripVertex> {
    let n = curves.len();
    if n == 0 {
        return vec![];
    }
    let left_coords = [P2::new(0., 0.), P2::new(0., 1.)];
    let right_coords = [P2::new(1., 0.), P2::new(1., 1.)];
    let normal = V3::y();

    let mut vertices = Vec::with_capacity(2 * (n + 1));
    for i in 0..n + 1 {
        vertices.push(StripVertex {
            position: curves.left[i % n],
            tex_coord: left_coords[i % 2],
            normal,
        });
        vertices.push(StripVertex {
            position: curves.right[i % n],
            tex_coord: right_coords[i % 2],
            normal,
        });
    }
    vertices
}

/// Flatten vertices into position, texture coordinate, normal, as floats,
/// ready to copy into a vertex buffer.
pub fn interleave(vertices: &[StripVertex]) -> Vec<f32> {
    let mut data = Vec::with_capacity(vertices.len() * 8);
    for v in vertices {
        data.extend_from_slice(&[v.position.x, v.position.y, v.position.z]);
        data.extend_from_slice(&[v.tex_coord.x, v.tex_coord.y]);
        data.extend_from_slice(&[v.normal.x, v.normal.y, v.normal.z]);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curves() -> OffsetCurves {
        OffsetCurves {
            left: vec![
                P3::new(0., 0., 0.),
                P3::new(1., 0., 0.),
                P3::new(2., 0., 0.),
            ],
            right: vec![
                P3::new(0., 0., 1.),
                P3::new(1., 0., 1.),
                P3::new(2., 0., 1.),
            ],
        }
    }

    #[test]
    fn test_strip_closes() {
        let strip = road_strip(&curves());
        assert_eq!(strip.len(), 8);
        assert_eq!(strip[6].position, strip[0].position);
        assert_eq!(strip[7].position, strip[1].position);
        assert_eq!(strip[2].position, P3::new(1., 0., 0.));
        assert_eq!(strip[3].position, P3::new(1., 0., 1.));
    }

    #[test]
    fn test_tex_coords_alternate() {
        let strip = road_strip(&curves());
        assert_eq!(strip[0].tex_coord, P2::new(0., 0.));
        assert_eq!(strip[1].tex_coord, P2::new(1., 0.));
        assert_eq!(strip[2].tex_coord, P2::new(0., 1.));
        assert_eq!(strip[3].tex_coord, P2::new(1., 1.));
        assert_eq!(strip[4].tex_coord, P2::new(0., 0.));
        assert!(strip.iter().all(|v| v.normal == V3::y()));
    }

    #[test]
    fn test_interleave() {
        let strip = road_strip(&curves());
        let data = interleave(&strip);
        assert_eq!(data.len(), 8 * 8);
        assert_eq!(&data[8..16], &[0., 0., 1., 1., 0., 0., 1., 0.]);
    }

    #[test]
    fn test_empty() {
        let empty = OffsetCurves {
            left: vec![],
            right: vec![],
        };
        assert!(road_strip(&empty).is_empty());
    }
}
