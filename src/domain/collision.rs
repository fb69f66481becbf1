//! Collision detection based on axis-aligned rectangles and convex polygons.

use super::Vector;

/// Anything with an axis-aligned extent that can be hit-tested against a query rectangle.
pub trait HasBounds {
    fn bounds(&self) -> Rect;

    fn intersects_bounds(&self, rect: &Rect) -> bool {
        self.bounds().intersects(rect)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    min: Vector,
    max: Vector,
}

impl Rect {
    /// Creates the rectangle spanned by two arbitrary opposite corners.
    pub fn new(c_1: Vector, c_2: Vector) -> Self {
        Self {
            min: Vector::new(c_1.x().min(c_2.x()), c_1.y().min(c_2.y())),
            max: Vector::new(c_1.x().max(c_2.x()), c_1.y().max(c_2.y())),
        }
    }

    pub fn from_center(center: Vector, half_extents: Vector) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Smallest rectangle containing all points, `None` for no points.
    pub fn enclosing(points: &[Vector]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(*first, *first), |rect, p| Self {
            min: Vector::new(rect.min.x().min(p.x()), rect.min.y().min(p.y())),
            max: Vector::new(rect.max.x().max(p.x()), rect.max.y().max(p.y())),
        }))
    }

    pub fn min(&self) -> Vector {
        self.min
    }

    pub fn max(&self) -> Vector {
        self.max
    }

    pub fn center(&self) -> Vector {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    pub fn corners(&self) -> [Vector; 4] {
        [
            self.min,
            Vector::new(self.max.x(), self.min.y()),
            self.max,
            Vector::new(self.min.x(), self.max.y()),
        ]
    }

    pub fn contains(&self, position: Vector) -> bool {
        position.x() + f64::EPSILON >= self.min.x()
            && position.x() - f64::EPSILON <= self.max.x()
            && position.y() + f64::EPSILON >= self.min.y()
            && position.y() - f64::EPSILON <= self.max.y()
    }

    /// Strict overlap test, rectangles sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x().max(other.min.x()) < self.max.x().min(other.max.x())
            && self.min.y().max(other.min.y()) < self.max.y().min(other.max.y())
    }
}

/// Clips the parametric line `origin + t * direction`, `t` in `interval`, against the rectangle
/// using the slab method. Returns the clipped `(near, far)` interval, or `None` if it is empty.
///
/// An axis on which the direction has no component constrains nothing if the origin lies within
/// the slab, and rejects the line otherwise.
pub fn clip_line(
    origin: Vector,
    direction: Vector,
    rect: &Rect,
    interval: (f64, f64),
) -> Option<(f64, f64)> {
    let (mut near, mut far) = interval;

    for (o, d, min, max) in [
        (origin.x(), direction.x(), rect.min.x(), rect.max.x()),
        (origin.y(), direction.y(), rect.min.y(), rect.max.y()),
    ] {
        if d.abs() < f64::EPSILON {
            if o < min || o > max {
                return None;
            }
            continue;
        }

        let t_1 = (min - o) / d;
        let t_2 = (max - o) / d;
        near = near.max(t_1.min(t_2));
        far = far.min(t_1.max(t_2));

        if near > far {
            return None;
        }
    }

    Some((near, far))
}

/// Overlap test between a convex polygon, given by its corners in order, and a rectangle.
///
/// The shapes overlap if an edge of the polygon crosses the rectangle, a corner of the polygon
/// lies in the rectangle, or a corner of the rectangle lies in the polygon. Touching counts.
pub fn polygon_overlaps_rect(corners: &[Vector], rect: &Rect) -> bool {
    corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .any(|(a, b)| clip_line(*a, *b - *a, rect, (0.0, 1.0)).is_some())
        || corners.iter().any(|c| rect.contains(*c))
        || rect
            .corners()
            .iter()
            .any(|c| convex_polygon_contains(corners, *c))
}

/// Inclusive containment test for a convex polygon given by its corners in order. A polygon
/// without area contains nothing.
pub fn convex_polygon_contains(corners: &[Vector], position: Vector) -> bool {
    let mut orientation = 0.0;

    for (a, b) in corners.iter().zip(corners.iter().cycle().skip(1)) {
        let side = (*b - *a).cross(position - *a);
        if side.abs() <= f64::EPSILON {
            continue;
        }
        if orientation == 0.0 {
            orientation = side.signum();
        } else if side.signum() != orientation {
            return false;
        }
    }

    orientation != 0.0
}
