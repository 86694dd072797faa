use nalgebra as na;

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("Transform has zero or non-finite scale")]
    Degenerate,

    #[error("Transform is not affine")]
    Projective,

    #[error("Rotation quaternion has zero length")]
    ZeroQuaternion,
}

/// Splits affine transform into rigid part and per-axis scale.
pub fn decompose_transform3(
    m: &na::Matrix4<f32>,
) -> Result<(na::Isometry3<f32>, na::Vector3<f32>), TransformError> {
    if m[(3, 0)] != 0.0 || m[(3, 1)] != 0.0 || m[(3, 2)] != 0.0 || m[(3, 3)] != 1.0
    {
        return Err(TransformError::Projective);
    }

    let t: na::Vector3<f32> = m.column(3).xyz();

    let mut r: na::Matrix3<f32> =
        m.fixed_slice::<na::U3, na::U3>(0, 0).into_owned();
    let mut s = na::Vector3::new(
        r.column(0).norm(),
        r.column(1).norm(),
        r.column(2).norm(),
    );

    if s.iter().any(|c| !c.is_normal()) {
        return Err(TransformError::Degenerate);
    }

    let sign = r.determinant().signum();
    s *= sign;
    r *= sign;

    r *= na::Matrix3::from_diagonal(&s.map(|c| 1.0 / c));

    let r = na::UnitQuaternion::from_rotation_matrix(
        &na::Rotation3::from_matrix(&r),
    );

    let iso = na::Isometry3::from_parts(na::Translation3::from(t), r);
    Ok((iso, s))
}

/// Builds rotation from `[x, y, z, w]` quaternion components.
pub fn rotation_from_xyzw(
    [x, y, z, w]: [f32; 4],
) -> Result<na::UnitQuaternion<f32>, TransformError> {
    let q = na::Quaternion::new(w, x, y, z);
    if !q.norm().is_normal() {
        return Err(TransformError::ZeroQuaternion);
    }
    Ok(na::UnitQuaternion::from_quaternion(q))
}
