//! Convex polygon collider.
//!
//! A [`Collider`] stores its shape in local space. Each frame the collision
//! system places it in the world with [`Polygon::world_vertices`], using the
//! owning entity's [`Transform`] position and rotation around the polygon's
//! own origin, then runs a separating-axis test between pairs.
//!
//! Solid colliders are pushed apart along the minimum translation vector;
//! triggers only produce callbacks. What happens on contact is decided by the
//! collider's [`CollisionReaction`].

use bevy_ecs::prelude::Component;
use glam::Vec2;
use smallvec::{SmallVec, smallvec};

use crate::components::reaction::CollisionReaction;
use crate::components::transform::Transform;

/// Separation below this depth counts as touching, not overlapping.
pub const CONTACT_EPSILON: f32 = 1e-4;
/// Polygons with less area than this are skipped.
pub const DEGENERATE_AREA: f32 = 1e-6;

pub type Vertices = SmallVec<[Vec2; 8]>;

/// Convex polygon in local space with its rotation pivot.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: Vertices,
    pub origin: Vec2,
}

impl Polygon {
    pub fn new(vertices: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            origin: Vec2::ZERO,
        }
    }

    /// Axis-aligned rectangle from `(0, 0)` to `(width, height)`, pivot in the centre.
    pub fn rect(width: f32, height: f32) -> Self {
        Self {
            vertices: smallvec![
                Vec2::new(0.0, 0.0),
                Vec2::new(width, 0.0),
                Vec2::new(width, height),
                Vec2::new(0.0, height),
            ],
            origin: Vec2::new(width * 0.5, height * 0.5),
        }
    }

    /// Regular polygon inscribed in a circle of `radius`, centred at `(radius, radius)`.
    pub fn regular(sides: usize, radius: f32) -> Self {
        let sides = sides.max(3);
        let center = Vec2::splat(radius);
        let step = std::f32::consts::TAU / sides as f32;
        Self {
            vertices: (0..sides)
                .map(|i| center + Vec2::from_angle(step * i as f32) * radius)
                .collect(),
            origin: center,
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Signed shoelace area (positive for counter-clockwise winding).
    pub fn signed_area(&self) -> f32 {
        signed_area(&self.vertices)
    }

    /// True for fewer than three vertices or (near) zero area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || self.signed_area().abs() < DEGENERATE_AREA
    }

    /// Vertices in world space: rotate around `origin`, then translate by the
    /// transform position.
    pub fn world_vertices(&self, transform: &Transform) -> Vertices {
        let rotation = Vec2::from_angle(transform.rotation.to_radians());
        self.vertices
            .iter()
            .map(|v| rotation.rotate(*v - self.origin) + self.origin + transform.position)
            .collect()
    }
}

/// Collision shape, physical behaviour and contact reaction.
#[derive(Component, Clone, Debug)]
pub struct Collider {
    pub body: Polygon,
    /// Solid colliders are separated from other solids; triggers never move.
    pub solid: bool,
    pub reaction: CollisionReaction,
}

impl Collider {
    pub fn solid(body: Polygon, reaction: CollisionReaction) -> Self {
        Self {
            body,
            solid: true,
            reaction,
        }
    }

    pub fn trigger(body: Polygon, reaction: CollisionReaction) -> Self {
        Self {
            body,
            solid: false,
            reaction,
        }
    }
}

fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| vertices[i].perp_dot(vertices[(i + 1) % n]))
        .sum();
    twice * 0.5
}

fn centroid(vertices: &[Vec2]) -> Vec2 {
    vertices.iter().copied().sum::<Vec2>() / vertices.len().max(1) as f32
}

/// Returns `(min, max)` corners of the vertices' bounding box.
pub fn bounding_box(vertices: &[Vec2]) -> (Vec2, Vec2) {
    vertices.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), v| (min.min(*v), max.max(*v)),
    )
}

/// Cheap broad-phase rejection on bounding boxes.
pub fn boxes_overlap(a: (Vec2, Vec2), b: (Vec2, Vec2)) -> bool {
    a.0.x < b.1.x && a.1.x > b.0.x && a.0.y < b.1.y && a.1.y > b.0.y
}

fn project(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    vertices
        .iter()
        .map(|v| v.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        })
}

/// Separating-axis test between two convex polygons given in world space.
///
/// Returns the minimum translation vector that moves `b` out of `a`, or `None`
/// if the polygons are separated or only touching.
pub fn separation(a: &[Vec2], b: &[Vec2]) -> Option<Vec2> {
    let mut best_depth = f32::INFINITY;
    let mut best_axis = Vec2::ZERO;

    for poly in [a, b] {
        let n = poly.len();
        for i in 0..n {
            let edge = poly[(i + 1) % n] - poly[i];
            let axis = edge.perp().normalize_or_zero();
            if axis == Vec2::ZERO {
                continue;
            }
            let (min_a, max_a) = project(a, axis);
            let (min_b, max_b) = project(b, axis);
            let depth = max_a.min(max_b) - min_a.max(min_b);
            if depth <= CONTACT_EPSILON {
                return None;
            }
            if depth < best_depth {
                best_depth = depth;
                best_axis = axis;
            }
        }
    }

    if best_axis == Vec2::ZERO {
        return None;
    }
    // Point the axis from a towards b.
    if (centroid(b) - centroid(a)).dot(best_axis) < 0.0 {
        best_axis = -best_axis;
    }
    Some(best_axis * best_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn square_at(x: f32, y: f32, side: f32) -> Vertices {
        Polygon::rect(side, side).world_vertices(&Transform::new(x, y, side, side))
    }

    #[test]
    fn rect_area_and_origin() {
        let p = Polygon::rect(4.0, 2.0);
        assert!(approx_eq(p.signed_area(), 8.0));
        assert_eq!(p.origin, Vec2::new(2.0, 1.0));
        assert!(!p.is_degenerate());
    }

    #[test]
    fn collinear_polygon_is_degenerate() {
        let p = Polygon::new([Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)]);
        assert!(p.is_degenerate());
        assert!(Polygon::new([Vec2::ZERO, Vec2::X]).is_degenerate());
    }

    #[test]
    fn regular_polygon_has_requested_sides() {
        let p = Polygon::regular(8, 10.0);
        assert_eq!(p.vertices.len(), 8);
        // An inscribed octagon covers about 90% of the circle.
        let circle = std::f32::consts::PI * 100.0;
        assert!(p.signed_area() > circle * 0.85 && p.signed_area() < circle);
    }

    #[test]
    fn world_vertices_translate_without_rotation() {
        let p = Polygon::rect(2.0, 2.0);
        let v = p.world_vertices(&Transform::new(10.0, 5.0, 2.0, 2.0));
        assert_eq!(v[0], Vec2::new(10.0, 5.0));
        assert_eq!(v[2], Vec2::new(12.0, 7.0));
    }

    #[test]
    fn world_vertices_rotate_around_origin() {
        let p = Polygon::rect(2.0, 2.0);
        let t = Transform::new(0.0, 0.0, 2.0, 2.0).with_rotation(90.0);
        let v = p.world_vertices(&t);
        // (0,0) rotated 90° around (1,1) lands on (2,0).
        assert!(approx_eq(v[0].x, 2.0));
        assert!(approx_eq(v[0].y, 0.0));
    }

    #[test]
    fn separated_squares_do_not_overlap() {
        let a = square_at(0.0, 0.0, 10.0);
        let b = square_at(20.0, 0.0, 10.0);
        assert!(separation(&a, &b).is_none());
    }

    #[test]
    fn touching_squares_do_not_overlap() {
        let a = square_at(0.0, 0.0, 10.0);
        let b = square_at(10.0, 0.0, 10.0);
        assert!(separation(&a, &b).is_none());
    }

    #[test]
    fn overlapping_squares_yield_mtv_towards_b() {
        let a = square_at(0.0, 0.0, 10.0);
        let b = square_at(8.0, 1.0, 10.0);
        let mtv = separation(&a, &b).expect("squares overlap");
        assert!(approx_eq(mtv.x, 2.0));
        assert!(approx_eq(mtv.y, 0.0));

        let reverse = separation(&b, &a).expect("squares overlap");
        assert!(approx_eq(reverse.x, -2.0));
    }

    #[test]
    fn rotated_square_misses_corner_gap() {
        // A diamond whose bounding box overlaps the square but whose edges do not.
        let a = square_at(0.0, 0.0, 10.0);
        let diamond = Polygon::rect(10.0, 10.0)
            .world_vertices(&Transform::new(11.0, 11.0, 10.0, 10.0).with_rotation(45.0));
        assert!(boxes_overlap(bounding_box(&a), bounding_box(&diamond)));
        assert!(separation(&a, &diamond).is_none());
    }

    #[test]
    fn bounding_box_covers_all_vertices() {
        let v = square_at(-5.0, 3.0, 2.0);
        let (min, max) = bounding_box(&v);
        assert_eq!(min, Vec2::new(-5.0, 3.0));
        assert_eq!(max, Vec2::new(-3.0, 5.0));
    }
}
