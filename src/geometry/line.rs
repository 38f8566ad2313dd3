use tracing::trace;

use crate::math::{is_negligible, Real};

use super::{Axis, Degeneracy, Linear, Plane, Solution, Vector};

/// An infinite line defined by an origin point and a direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`.
///
/// The representation is not canonical: [`equal`](Self::equal) compares the
/// geometric lines, [`identical`](Self::identical) the stored vectors. A zero
/// direction is representable, but most queries on it are undefined.
#[derive(Debug, Clone, Copy)]
pub struct Line<T> {
    origin: Vector<T>,
    direction: Vector<T>,
}

impl<T: Real> Line<T> {
    /// Creates a new line from an origin and direction.
    #[must_use]
    pub fn new(origin: Vector<T>, direction: Vector<T>) -> Self {
        Self { origin, direction }
    }

    /// Creates a line through the global origin.
    #[must_use]
    pub fn from_direction(direction: Vector<T>) -> Self {
        Self::new(Vector::zero(), direction)
    }

    /// Creates a line along `axis` through the global origin, with a direction
    /// of length `len`.
    #[must_use]
    pub fn axis(axis: Axis, len: T) -> Self {
        Self::from_direction(Vector::axis(axis, len))
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Vector<T> {
        &self.origin
    }

    /// Returns the direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector<T> {
        &self.direction
    }

    /// Line projected onto the axis-aligned plane at `value`.
    #[must_use]
    pub fn flatten(&self, axis: Axis, value: T) -> Self {
        Self::new(
            self.origin.flatten(axis, value),
            self.direction.flatten(axis, nalgebra::zero()),
        )
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn point(&self, t: T) -> Vector<T> {
        self.origin + self.direction * t
    }

    /// Same line with the origin closest to the global origin and a unit
    /// direction.
    #[must_use]
    pub fn norm(&self) -> Self {
        // (o - a * d) . d = 0
        let a = self.origin.dot(&self.direction) / self.direction.len_squared();
        Self::new(self.origin - self.direction * a, self.direction.norm())
    }

    /// Parameter of `p` along the line. Only meaningful if `p` lies on it.
    ///
    /// Solved on the dominant axis of the direction, which is non-zero for a
    /// well-defined line.
    #[must_use]
    pub fn find(&self, p: &Vector<T>) -> T {
        let i = self.direction.largest_axis();
        (p[i] - self.origin[i]) / self.direction[i]
    }

    /// Returns `true` if `p` lies on the line.
    #[must_use]
    pub fn touch(&self, p: &Vector<T>, precision: T) -> bool {
        let expected = self.point(self.find(p));
        p.equal(&expected, precision)
    }

    /// Returns `true` if both describe the same geometric line.
    #[must_use]
    pub fn equal(&self, l: &Self, precision: T) -> bool {
        l.touch(&self.origin, precision) && l.direction.parallel(&self.direction, precision)
    }

    /// Returns `true` if origin and direction are equal.
    #[must_use]
    pub fn identical(&self, l: &Self, precision: T) -> bool {
        l.origin.equal(&self.origin, precision) && l.direction.equal(&self.direction, precision)
    }

    // ── closest approach ──

    /// Parameter of the foot of the perpendicular from `p`.
    #[must_use]
    pub fn closest_factor(&self, p: &Vector<T>) -> T {
        // (o + a * d - p) . d = 0
        (*p - self.origin).dot(&self.direction) / self.direction.len_squared()
    }

    /// Shortest vector from `p` to the line.
    #[must_use]
    pub fn closest(&self, p: &Vector<T>) -> Vector<T> {
        self.point(self.closest_factor(p)) - *p
    }

    /// Parameters `(s, t)` of the closest points on `self` and `l`.
    ///
    /// Parallel lines have no unique pair; `s` is then `0` and `t` the foot of
    /// this line's origin on `l`.
    #[must_use]
    pub fn closest_factors(&self, l: &Self, precision: T) -> Linear<T> {
        // o + s * d + r * v = l.o + t * l.d, with v = d x l.d
        let v = self.direction.cross(&l.direction);
        if v.is_zero(precision) {
            return Linear::new(nalgebra::zero(), l.closest_factor(&self.origin));
        }

        let vv = v.len_squared();
        let df = l.origin - self.origin;
        let s = -df.dot(&v.cross(&l.direction)) / vv;
        let t = -df.dot(&v.cross(&self.direction)) / vv;
        Linear::new(s, t)
    }

    /// Shortest segment connecting `self` to `l`, as a line whose origin lies
    /// on `self` and whose direction reaches `l` at parameter `1`.
    #[must_use]
    pub fn closest_line(&self, l: &Self, precision: T) -> Self {
        let v = self.direction.cross(&l.direction);
        if v.is_zero(precision) {
            return Self::new(self.origin, l.closest(&self.origin));
        }

        let vv = v.len_squared();
        let df = l.origin - self.origin;
        let r = df.dot(&v) / vv;
        let s = -df.dot(&v.cross(&l.direction)) / vv;
        Self::new(self.point(s), v * r)
    }

    // ── intersections ──

    /// Parameter at which the line crosses the plane `axis = value`.
    ///
    /// Invalid with sentinel `0` if the line runs parallel to that plane.
    #[must_use]
    pub fn intersect_axis_plane_factor(&self, axis: Axis, value: T, precision: T) -> Solution<T> {
        let dc = self.direction[axis];
        if dc.abs() <= precision {
            trace!(%axis, component = %dc, "line is parallel to the axis plane");
            return Solution::invalid(nalgebra::zero(), Degeneracy::Parallel);
        }
        Solution::Valid((value - self.origin[axis]) / dc)
    }

    /// Point at which the line crosses the plane `axis = value`.
    ///
    /// Invalid with the zero vector as sentinel if the line runs parallel.
    #[must_use]
    pub fn intersect_axis_plane(&self, axis: Axis, value: T, precision: T) -> Solution<Vector<T>> {
        match self.intersect_axis_plane_factor(axis, value, precision) {
            Solution::Valid(a) => Solution::Valid(self.point(a)),
            Solution::Invalid { reason, .. } => Solution::invalid(Vector::zero(), reason),
        }
    }

    /// Solves `o + s * d = l.o + t * l.d` in the two coordinates other than
    /// `axis`. Returns `None` if the lines are parallel in that view.
    fn solve_projected(&self, l: &Self, axis: Axis, precision: T) -> Option<Linear<T>> {
        let (i0, i1) = axis.others();
        let (d, ld) = (&self.direction, &l.direction);

        // equals the `axis` component of d x l.d
        let divisor = d[i0] * ld[i1] - d[i1] * ld[i0];
        if divisor.abs() <= precision {
            trace!(%axis, %divisor, "lines are parallel in the projected view");
            return None;
        }

        let df0 = l.origin[i0] - self.origin[i0];
        let df1 = l.origin[i1] - self.origin[i1];
        let s = (ld[i1] * df0 - ld[i0] * df1) / divisor;
        let t = (d[i1] * df0 - d[i0] * df1) / divisor;
        Some(Linear::new(s, t))
    }

    /// Parameters at which the two lines cross when viewed along `axis`
    /// (that coordinate ignored).
    ///
    /// Invalid with sentinel `(0, 0)` if the lines are parallel in that view.
    #[must_use]
    pub fn intersect_projected_factors(&self, l: &Self, axis: Axis, precision: T) -> Solution<Linear<T>> {
        match self.solve_projected(l, axis, precision) {
            Some(lin) => Solution::Valid(lin),
            None => Solution::invalid(Linear::zero(), Degeneracy::Parallel),
        }
    }

    /// Point on `self` where the two lines cross when viewed along `axis`.
    ///
    /// Invalid with this line's origin as sentinel.
    #[must_use]
    pub fn intersect_projected(&self, l: &Self, axis: Axis, precision: T) -> Solution<Vector<T>> {
        self.intersect_projected_factors(l, axis, precision)
            .map(|lin| self.point(lin.s))
    }

    /// Parameters `(s, t)` at which the two lines meet in 3D.
    ///
    /// The 2x2 system is solved in the view along the dominant axis of
    /// `d x l.d`, where its divisor is largest. The dropped coordinate is
    /// then checked, since a solvable projection does not imply the lines
    /// meet; the check is relative to the magnitude of the inputs, so
    /// crossings with a zero coordinate are found too.
    ///
    /// Invalid with sentinel `(0, 0)` if the lines are parallel
    /// ([`Degeneracy::Parallel`]) or skew ([`Degeneracy::Disjoint`]).
    #[must_use]
    pub fn intersect_line_factors(&self, l: &Self, precision: T) -> Solution<Linear<T>> {
        let axis = self.direction.cross(&l.direction).largest_axis();
        let Some(lin) = self.solve_projected(l, axis, precision) else {
            return Solution::invalid(Linear::zero(), Degeneracy::Parallel);
        };

        // o + s * d - (l.o + t * l.d) in the dropped coordinate, against the
        // size of the whole configuration
        let here = self.direction * lin.s;
        let there = l.direction * lin.t;
        let residual = (self.origin[axis] - l.origin[axis]) + here[axis] - there[axis];
        let scale = self
            .origin
            .len()
            .max(l.origin.len())
            .max(here.len())
            .max(there.len());
        if is_negligible(residual, scale, precision) {
            Solution::Valid(lin)
        } else {
            trace!(%axis, %residual, %scale, "lines are skew");
            Solution::invalid(Linear::zero(), Degeneracy::Disjoint)
        }
    }

    /// Point where the two lines meet.
    ///
    /// Invalid with this line's origin as sentinel, see
    /// [`intersect_line_factors`](Self::intersect_line_factors).
    #[must_use]
    pub fn intersect_line(&self, l: &Self, precision: T) -> Solution<Vector<T>> {
        self.intersect_line_factors(l, precision)
            .map(|lin| self.point(lin.s))
    }

    /// Point where the line crosses `plane`, see [`Plane::intersect_line`].
    #[must_use]
    pub fn intersect_plane(&self, plane: &Plane<T>, precision: T) -> Solution<Vector<T>> {
        plane.intersect_line(self, precision)
    }
}

impl<T: Real> Default for Line<T> {
    fn default() -> Self {
        Self::new(Vector::zero(), Vector::zero())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const P: f64 = f64::PRECISION;

    fn v(x: f64, y: f64, z: f64) -> Vector<f64> {
        Vector::new(x, y, z)
    }

    fn line(o: Vector<f64>, d: Vector<f64>) -> Line<f64> {
        Line::new(o, d)
    }

    // ── evaluation ──

    #[test]
    fn point_find_and_touch() {
        let l = line(v(1.0, 2.0, 3.0), v(0.5, -1.0, 2.0));
        let p = l.point(2.5);
        assert!(p.equal(&v(2.25, -0.5, 8.0), P));
        assert_relative_eq!(l.find(&p), 2.5);
        assert!(l.touch(&p, P));
        assert!(!l.touch(&(p + v(0.0, 0.1, 0.0)), P));
    }

    #[test]
    fn norm_moves_origin_to_foot_of_global_origin() {
        let l = line(v(5.0, 1.0, 0.0), v(2.0, 0.0, 0.0));
        let n = l.norm();
        assert!(n.origin().equal(&v(0.0, 1.0, 0.0), P));
        assert!(n.direction().equal(&v(1.0, 0.0, 0.0), P));
        assert!(n.equal(&l, P));
    }

    #[test]
    fn equal_versus_identical() {
        let a = line(v(0.0, 0.0, 0.0), v(1.0, 1.0, 0.0));
        let b = line(v(2.0, 2.0, 0.0), v(-3.0, -3.0, 0.0));
        assert!(a.equal(&b, P));
        assert!(!a.identical(&b, P));
        assert!(a.identical(&a, P));

        let shifted = line(v(0.0, 1.0, 0.0), v(1.0, 1.0, 0.0));
        assert!(!a.equal(&shifted, P));
    }

    #[test]
    fn flatten_drops_axis() {
        let l = line(v(1.0, 2.0, 3.0), v(4.0, 5.0, 6.0)).flatten(Axis::Z, 7.0);
        assert!(l.origin().equal(&v(1.0, 2.0, 7.0), P));
        assert!(l.direction().equal(&v(4.0, 5.0, 0.0), P));
    }

    // ── closest approach ──

    #[test]
    fn closest_vector_to_point_is_perpendicular() {
        let l = line(v(0.0, 0.0, 0.0), v(2.0, 0.0, 0.0));
        let p = v(3.0, 4.0, 0.0);
        assert_relative_eq!(l.closest_factor(&p), 1.5);
        let c = l.closest(&p);
        assert!(c.equal(&v(0.0, -4.0, 0.0), P));
        assert!(c.is_perpendicular(l.direction(), P));
    }

    #[test]
    fn closest_between_skew_lines() {
        let a = line(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
        let b = line(v(0.0, 2.0, 3.0), v(0.0, 1.0, 0.0));

        let lin = a.closest_factors(&b, P);
        assert_relative_eq!(lin.s, 0.0);
        assert_relative_eq!(lin.t, -2.0);

        let seg = a.closest_line(&b, P);
        assert!(seg.origin().equal(&v(0.0, 0.0, 0.0), P));
        assert!(seg.point(1.0).equal(&b.point(lin.t), P));
        assert_relative_eq!(seg.direction().len(), 3.0);
    }

    #[test]
    fn closest_between_parallel_lines() {
        let a = line(v(1.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
        let b = line(v(0.0, 0.0, 5.0), v(2.0, 0.0, 0.0));

        let lin = a.closest_factors(&b, P);
        assert_relative_eq!(lin.s, 0.0);
        assert_relative_eq!(lin.t, 0.5);

        let seg = a.closest_line(&b, P);
        assert!(seg.origin().equal(&v(1.0, 0.0, 0.0), P));
        assert!(b.touch(&seg.point(1.0), P));
    }

    // ── axis planes ──

    #[test]
    fn crosses_axis_plane() {
        let l = line(v(1.0, 1.0, 1.0), v(1.0, 2.0, -1.0));
        let hit = l.intersect_axis_plane(Axis::Y, 5.0, P);
        assert!(hit.is_valid());
        assert!(hit.value().equal(&v(3.0, 5.0, -1.0), P));
        assert_relative_eq!(l.intersect_axis_plane_factor(Axis::Y, 5.0, P).value(), 2.0);
    }

    #[test]
    fn parallel_to_axis_plane_is_invalid() {
        let l = line(v(1.0, 1.0, 1.0), v(1.0, 0.0, 0.0));
        let hit = l.intersect_axis_plane(Axis::Z, 0.0, P);
        assert_eq!(hit.reason(), Some(Degeneracy::Parallel));
        assert!(hit.value().is_zero(P));

        let factor = l.intersect_axis_plane_factor(Axis::Z, 0.0, P);
        assert!(factor.is_invalid());
        assert_relative_eq!(factor.value(), 0.0);
    }

    // ── line-line ──

    #[test]
    fn projected_intersection_ignores_dropped_axis() {
        let a = line(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
        let b = line(v(3.0, -1.0, 9.0), v(0.0, 1.0, 0.0));

        // skew in 3D, crossing in the X-Y view
        assert!(a.intersect_line(&b, P).is_invalid());
        let lin = a.intersect_projected_factors(&b, Axis::Z, P).value();
        assert_relative_eq!(lin.s, 3.0);
        assert_relative_eq!(lin.t, 1.0);
        assert!(a
            .intersect_projected(&b, Axis::Z, P)
            .value()
            .equal(&v(3.0, 0.0, 0.0), P));

        // a collapses to a point in the Y-Z view
        assert!(a.intersect_projected(&b, Axis::X, P).is_invalid());
    }

    #[test]
    fn oblique_lines_meet() {
        let a = line(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0));
        let b = line(v(4.0, 0.0, 2.0), v(-1.0, 1.0, 0.0));

        let hit = a.intersect_line(&b, P);
        assert!(hit.is_valid(), "got {hit:?}");
        assert!(hit.value().equal(&v(2.0, 2.0, 2.0), P));

        let lin = a.intersect_line_factors(&b, P).value();
        assert!(a.point(lin.s).equal(&b.point(lin.t), P));
    }

    #[test]
    fn skew_lines_are_disjoint() {
        let a = line(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
        let b = line(v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0));

        let hit = a.intersect_line_factors(&b, P);
        assert_eq!(hit.reason(), Some(Degeneracy::Disjoint));
        assert_eq!(hit.value(), Linear::zero());
        assert!(a.intersect_line(&b, P).value().equal(a.origin(), P));
    }

    #[test]
    fn oblique_lines_meet_on_coordinate_plane() {
        // the dropped coordinate of the crossing is 0 and only rounding noise
        // is left on both sides
        let x = v(2.846_998_727_568_818_7, 6.452_909_833_666_961, 0.0);
        let (da, db) = (v(-5.84, 2.21, -5.57), v(5.87, -7.46, 9.91));
        let a = line(x - da * -3.7, da);
        let b = line(x - db * 2.0, db);

        let hit = a.intersect_line(&b, P);
        assert!(hit.is_valid(), "got {hit:?}");
        assert!(hit.value().equal(&x, P));

        let lin = a.intersect_line_factors(&b, P).value();
        assert_relative_eq!(lin.s, -3.7, epsilon = 1e-12);
        assert_relative_eq!(lin.t, 2.0, epsilon = 1e-12);

        // lifting one line off the crossing makes them skew
        let lifted = line(*b.origin() + v(0.0, 0.0, 1e-3), db);
        assert_eq!(
            a.intersect_line(&lifted, P).reason(),
            Some(Degeneracy::Disjoint)
        );
    }

    #[test]
    fn crossing_a_plane_delegates() {
        let plane = Plane::new(v(0.0, 0.0, 2.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0));
        let l = line(v(1.0, 1.0, 0.0), v(0.0, 0.0, 4.0));
        assert!(l.intersect_plane(&plane, P).value().equal(&v(1.0, 1.0, 2.0), P));
    }
}
