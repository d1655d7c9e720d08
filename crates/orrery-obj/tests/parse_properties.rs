//! Property-style checks of the OBJ parser through its public API.

use orrery_obj::{Face, parse_obj, parse_obj_with_stats};

/// Deterministic pseudo-random positions so the checks cover varied input.
fn positions(count: usize) -> Vec<[f32; 3]> {
    let mut state: u32 = 0x9e37_79b9;
    (0..count)
        .map(|_| {
            let mut next = || {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state % 2000) as f32 / 100.0 - 10.0
            };
            [next(), next(), next()]
        })
        .collect()
}

fn obj_text(points: &[[f32; 3]], faces: &[Vec<i64>]) -> String {
    let mut text = String::new();
    for p in points {
        text.push_str(&format!("v {} {} {}\n", p[0], p[1], p[2]));
    }
    for face in faces {
        text.push('f');
        for index in face {
            text.push_str(&format!(" {index}"));
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_triangle_only_output_length() {
    let points = positions(12);
    let faces: Vec<Vec<i64>> = (0..10).map(|i| vec![i + 1, i + 2, i + 3]).collect();
    let attrs = parse_obj(&obj_text(&points, &faces));

    let refs: usize = faces.iter().map(Vec::len).sum();
    assert_eq!(attrs.position.len(), 3 * refs);
}

#[test]
fn test_positive_index_matches_nth_v_line() {
    let points = positions(8);
    let faces: Vec<Vec<i64>> = (1..=8).map(|i| vec![i, i, i]).collect();
    let attrs = parse_obj(&obj_text(&points, &faces));

    for (i, expected) in points.iter().enumerate() {
        let start = i * 9;
        assert_eq!(&attrs.position[start..start + 3], expected.as_slice());
    }
}

#[test]
fn test_negative_one_is_most_recent() {
    let points = positions(5);
    for k in 1..=points.len() {
        let text = obj_text(&points[..k], &[vec![-1, -1, -1]]);
        let attrs = parse_obj(&text);
        assert_eq!(&attrs.position[0..3], points[k - 1].as_slice());
    }
}

#[test]
fn test_ngon_emits_m_minus_two_triangles_sharing_corner_zero() {
    let points = positions(9);
    for m in 3..=9_i64 {
        let face: Vec<i64> = (1..=m).collect();
        let (attrs, stats) = parse_obj_with_stats(&obj_text(&points, &[face]));

        assert_eq!(stats.triangles as i64, m - 2);
        assert_eq!(attrs.vertex_count() as i64, 3 * (m - 2));
        for tri in attrs.position.chunks(9) {
            assert_eq!(&tri[0..3], points[0].as_slice());
        }
    }
}

#[test]
fn test_quad_scenario() {
    let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
    let (attrs, stats) = parse_obj_with_stats(text);
    assert_eq!(stats.triangles, 2);
    assert_eq!(
        attrs.position,
        vec![
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
        ]
    );

    let face = Face::parse(["1", "2", "3", "4"]);
    assert!(face.triangles().all(|tri| tri[0].position == Some(1)));
}

#[test]
fn test_bundled_ball_mesh_is_consistent() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/ball.obj");
    let attrs = orrery_obj::load_obj(std::path::Path::new(path)).unwrap();
    assert!(attrs.vertex_count() > 0);
    assert_eq!(attrs.vertex_count() % 3, 0);
    assert!(attrs.is_consistent());
    assert_eq!(attrs.normal.len(), attrs.position.len());
}
