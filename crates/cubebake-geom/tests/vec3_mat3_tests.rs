use cubebake_geom::{IVec3, Mat3i, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn vec3_cross_follows_right_hand_rule() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert!(x.cross(y).approx_eq(Vec3::new(0.0, 0.0, 1.0), 1e-6));
    assert!(y.cross(x).approx_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
}

#[test]
fn vec3_dot_and_length() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.dot(v), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));
}

#[test]
fn vec3_arithmetic() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(0.5, -1.0, 2.0);
    assert!((a + b).approx_eq(Vec3::new(1.5, 1.0, 5.0), 1e-6));
    assert!((a - b).approx_eq(Vec3::new(0.5, 3.0, 1.0), 1e-6));
    assert!((a * 2.0).approx_eq(Vec3::new(2.0, 4.0, 6.0), 1e-6));
    assert_eq!(Vec3::from(IVec3::new(-1, 0, 1)), Vec3::new(-1.0, 0.0, 1.0));
}

#[test]
fn quarter_turns_move_axes() {
    // +Y rotated a quarter turn about +X lands on +Z.
    assert_eq!(
        Mat3i::rotation_x(1).transform(IVec3::new(0, 1, 0)),
        IVec3::new(0, 0, 1)
    );
    // +Z rotated a quarter turn about +Y lands on +X.
    assert_eq!(
        Mat3i::rotation_y(1).transform(IVec3::new(0, 0, 1)),
        IVec3::new(1, 0, 0)
    );
    // +X rotated a quarter turn about +Z lands on +Y.
    assert_eq!(
        Mat3i::rotation_z(1).transform(IVec3::new(1, 0, 0)),
        IVec3::new(0, 1, 0)
    );
}

#[test]
fn rotations_are_proper() {
    for q in -4..8 {
        for m in [Mat3i::rotation_x(q), Mat3i::rotation_y(q), Mat3i::rotation_z(q)] {
            assert_eq!(m.determinant(), 1);
            assert_eq!(m * m.transpose(), Mat3i::IDENTITY);
        }
    }
}

#[test]
fn negative_turn_undoes_positive_turn() {
    assert_eq!(Mat3i::rotation_y(-1) * Mat3i::rotation_y(1), Mat3i::IDENTITY);
    assert_eq!(Mat3i::rotation_x(-3), Mat3i::rotation_x(1));
}
