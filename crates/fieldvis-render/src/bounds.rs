//! Bounding spheres for view culling.

use glam::Vec3;

/// A sphere enclosing a drawable's geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 0.0,
        }
    }
}

impl BoundingSphere {
    /// Creates a bounding sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Returns whether `point` lies inside the sphere, up to `eps`.
    pub fn contains(&self, point: Vec3, eps: f32) -> bool {
        self.center.distance(point) <= self.radius + eps
    }
}

/// Computes a sphere enclosing all points.
///
/// The center is the midpoint of the axis-aligned bounding box and the radius
/// the distance to the farthest point. An empty point set yields a zero sphere.
pub fn compute_bounding_sphere(points: &[Vec3]) -> BoundingSphere {
    if points.is_empty() {
        return BoundingSphere::default();
    }

    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for &p in points {
        min = min.min(p);
        max = max.max(p);
    }

    let center = (min + max) * 0.5;
    let radius = points
        .iter()
        .map(|p| center.distance(*p))
        .fold(0.0_f32, f32::max);

    BoundingSphere { center, radius }
}

/// Computes a sphere enclosing a set of spheres given as `(center, radius)`.
pub fn compute_bounding_sphere_of_spheres(spheres: &[(Vec3, f32)]) -> BoundingSphere {
    if spheres.is_empty() {
        return BoundingSphere::default();
    }

    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for &(c, r) in spheres {
        min = min.min(c - Vec3::splat(r));
        max = max.max(c + Vec3::splat(r));
    }

    let center = (min + max) * 0.5;
    let radius = spheres
        .iter()
        .map(|(c, r)| center.distance(*c) + r)
        .fold(0.0_f32, f32::max);

    BoundingSphere { center, radius }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unit_cube() {
        let points: Vec<Vec3> = (0..8)
            .map(|i| Vec3::new((i & 1) as f32, ((i >> 1) & 1) as f32, ((i >> 2) & 1) as f32))
            .collect();
        let bs = compute_bounding_sphere(&points);
        assert!((bs.center - Vec3::splat(0.5)).length() < 1e-6);
        assert!((bs.radius - 0.75_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(compute_bounding_sphere(&[]), BoundingSphere::default());
        let bs = compute_bounding_sphere(&[Vec3::new(2.0, -1.0, 4.0)]);
        assert_eq!(bs.center, Vec3::new(2.0, -1.0, 4.0));
        assert_eq!(bs.radius, 0.0);
    }

    #[test]
    fn test_spheres_enclosed() {
        let spheres = [(Vec3::ZERO, 1.0), (Vec3::new(4.0, 0.0, 0.0), 0.5)];
        let bs = compute_bounding_sphere_of_spheres(&spheres);
        assert!(bs.contains(Vec3::new(-1.0, 0.0, 0.0), 1e-5));
        assert!(bs.contains(Vec3::new(4.5, 0.0, 0.0), 1e-5));
        assert!(bs.contains(Vec3::new(0.0, 1.0, 0.0), 1e-5));
    }

    proptest! {
        #[test]
        fn prop_encloses_all_points(
            coords in prop::collection::vec((-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0), 1..64)
        ) {
            let points: Vec<Vec3> = coords.into_iter().map(|(x, y, z)| Vec3::new(x, y, z)).collect();
            let bs = compute_bounding_sphere(&points);
            for p in &points {
                prop_assert!(bs.contains(*p, 1e-3));
            }
        }
    }
}
