use tracing::trace;

use crate::math::{is_negligible, lit, Real};

use super::{Axis, Degeneracy, Line, Linear, Solution, Vector};

/// An infinite plane in 3D space.
///
/// Defined by an origin point and two spanning vectors (`span_a`, `span_b`).
/// The normal is `span_a x span_b` and is not normalized.
///
/// Parametric form: `P(s, t) = origin + s * span_a + t * span_b`.
///
/// The spans also delimit two regions used by the containment tests: the
/// triangle `s, t >= 0, s + t <= 1` and the parallelogram ("cone")
/// `s, t in [0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Plane<T> {
    origin: Vector<T>,
    span_a: Vector<T>,
    span_b: Vector<T>,
}

/// Result of a containment test against the region of a [`Plane`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Containment {
    /// The point lies inside the region when viewed along the dropped axis.
    pub inside: bool,
    /// The point also lies in the plane itself.
    pub touching: bool,
}

impl<T: Real> Plane<T> {
    /// Creates a new plane from an origin and two spanning vectors.
    #[must_use]
    pub fn new(origin: Vector<T>, span_a: Vector<T>, span_b: Vector<T>) -> Self {
        Self {
            origin,
            span_a,
            span_b,
        }
    }

    /// Creates a plane through the global origin.
    #[must_use]
    pub fn from_spans(span_a: Vector<T>, span_b: Vector<T>) -> Self {
        Self::new(Vector::zero(), span_a, span_b)
    }

    /// Creates the plane perpendicular to `axis` at `distance` from the global
    /// origin, spanned by the unit vectors of the two other axes.
    #[must_use]
    pub fn axis(axis: Axis, distance: T) -> Self {
        let one = nalgebra::one::<T>();
        let (a, b) = match axis {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        };
        Self::new(
            Vector::axis(axis, distance),
            Vector::axis(a, one),
            Vector::axis(b, one),
        )
    }

    /// Returns the origin point.
    #[must_use]
    pub fn origin(&self) -> &Vector<T> {
        &self.origin
    }

    /// Returns the first spanning vector.
    #[must_use]
    pub fn span_a(&self) -> &Vector<T> {
        &self.span_a
    }

    /// Returns the second spanning vector.
    #[must_use]
    pub fn span_b(&self) -> &Vector<T> {
        &self.span_b
    }

    /// Plane projected onto the axis-aligned plane at `value`.
    #[must_use]
    pub fn flatten(&self, axis: Axis, value: T) -> Self {
        let zero = nalgebra::zero::<T>();
        Self::new(
            self.origin.flatten(axis, value),
            self.span_a.flatten(axis, zero),
            self.span_b.flatten(axis, zero),
        )
    }

    /// Returns the (unnormalized) normal `span_a x span_b`.
    #[must_use]
    pub fn normal(&self) -> Vector<T> {
        self.span_a.cross(&self.span_b)
    }

    /// Area of the triangle spanned by the plane.
    #[must_use]
    pub fn area(&self) -> T {
        self.normal().len() / lit::<T>(2.0)
    }

    /// Signed area of the triangle viewed along `axis`.
    #[must_use]
    pub fn area_projected(&self, axis: Axis) -> T {
        self.span_a.cross_component(axis, &self.span_b) / lit::<T>(2.0)
    }

    /// Centroid of the triangle spanned by the plane.
    #[must_use]
    pub fn center(&self) -> Vector<T> {
        self.origin + (self.span_a + self.span_b) / lit::<T>(3.0)
    }

    /// Evaluates the plane at `(s, t)`.
    #[must_use]
    pub fn point(&self, s: T, t: T) -> Vector<T> {
        self.origin + self.span_a * s + self.span_b * t
    }

    /// Evaluates the plane at the coefficients `lin`.
    #[must_use]
    pub fn point_at(&self, lin: Linear<T>) -> Vector<T> {
        self.point(lin.s, lin.t)
    }

    /// Same plane with the origin closest to the global origin and
    /// orthonormal spans. The first span keeps its direction.
    #[must_use]
    pub fn norm(&self) -> Self {
        let n = self.normal();
        let f = self.origin.dot(&n) / n.len_squared();
        let a = self.span_a.norm();
        Self::new(n * f, a, a.perpendicular(&self.span_b).norm())
    }

    // ── linear combination ──

    /// Expresses `p - origin` as `s * span_a + t * span_b`, ignoring the
    /// coordinate along `axis`.
    ///
    /// Undefined if the plane is perpendicular to the view, i.e. the normal
    /// has no `axis` component.
    #[must_use]
    pub fn linear_projected(&self, p: &Vector<T>, axis: Axis) -> Linear<T> {
        let (i0, i1) = axis.others();
        let (a, b) = (&self.span_a, &self.span_b);
        let v = *p - self.origin;

        // equals the `axis` component of the normal
        let divisor = a[i0] * b[i1] - a[i1] * b[i0];
        let s = (v[i0] * b[i1] - v[i1] * b[i0]) / divisor;
        let t = (a[i0] * v[i1] - a[i1] * v[i0]) / divisor;
        Linear::new(s, t)
    }

    /// Axis the coordinate-free queries drop: the dominant normal component,
    /// which is the divisor of [`linear_projected`](Self::linear_projected).
    fn view_axis(&self) -> Axis {
        self.normal().largest_axis()
    }

    /// Whether the dropped coordinate of `p` matches the plane at `lin`.
    fn touching(&self, p: &Vector<T>, lin: Linear<T>, axis: Axis, precision: T) -> bool {
        let along_a = self.span_a * lin.s;
        let along_b = self.span_b * lin.t;
        let residual = (p[axis] - self.origin[axis]) - (along_a[axis] + along_b[axis]);
        let scale = p
            .len()
            .max(self.origin.len())
            .max(along_a.len())
            .max(along_b.len());
        is_negligible(residual, scale, precision)
    }

    /// Coefficients of `p` in the best conditioned view, and whether `p` lies
    /// in the plane.
    #[must_use]
    pub fn linear(&self, p: &Vector<T>, precision: T) -> (Linear<T>, bool) {
        let axis = self.view_axis();
        let lin = self.linear_projected(p, axis);
        (lin, self.touching(p, lin, axis, precision))
    }

    // ── projections ──

    /// Moves `p` along `axis` onto the plane.
    #[must_use]
    pub fn project_along(&self, axis: Axis, p: &Vector<T>) -> Vector<T> {
        let lin = self.linear_projected(p, axis);
        let value = self.origin[axis] + lin.s * self.span_a[axis] + lin.t * self.span_b[axis];
        p.with_component(axis, value)
    }

    /// Orthogonal projection of the point `p` onto the plane.
    #[must_use]
    pub fn project(&self, p: &Vector<T>) -> Vector<T> {
        *p + self.closest(p)
    }

    /// Direction `v` with its normal component removed.
    #[must_use]
    pub fn project_vector(&self, v: &Vector<T>) -> Vector<T> {
        self.normal().perpendicular(v)
    }

    /// Shortest vector from `p` to the plane.
    #[must_use]
    pub fn closest(&self, p: &Vector<T>) -> Vector<T> {
        let n = self.normal();
        n * ((self.origin - *p).dot(&n) / n.len_squared())
    }

    /// Direction of steepest ascent along `axis` within the plane.
    ///
    /// Its length is not normalized. Zero if the plane is perpendicular to
    /// `axis`.
    #[must_use]
    pub fn steepest(&self, axis: Axis) -> Vector<T> {
        let a = self.span_a;
        let mut t = a.perpendicular(&self.span_b);
        t *= (a.len_squared() / t.len_squared()).sqrt();
        a * a[axis] + t * t[axis]
    }

    // ── containment ──

    /// Returns `true` if `p` lies in the triangle when viewed along `axis`.
    #[must_use]
    pub fn in_triangle_projected(&self, p: &Vector<T>, axis: Axis, precision: T) -> bool {
        let lin = self.linear_projected(p, axis);
        Self::triangle_bounds(lin, precision)
    }

    /// Returns `true` if `p` lies in the parallelogram when viewed along `axis`.
    #[must_use]
    pub fn in_cone_projected(&self, p: &Vector<T>, axis: Axis, precision: T) -> bool {
        let lin = self.linear_projected(p, axis);
        Self::cone_bounds(lin, precision)
    }

    /// Tests `p` against the triangle in the best conditioned view.
    #[must_use]
    pub fn in_triangle(&self, p: &Vector<T>, precision: T) -> Containment {
        let axis = self.view_axis();
        let lin = self.linear_projected(p, axis);
        Containment {
            inside: Self::triangle_bounds(lin, precision),
            touching: self.touching(p, lin, axis, precision),
        }
    }

    /// Tests `p` against the parallelogram in the best conditioned view.
    #[must_use]
    pub fn in_cone(&self, p: &Vector<T>, precision: T) -> Containment {
        let axis = self.view_axis();
        let lin = self.linear_projected(p, axis);
        Containment {
            inside: Self::cone_bounds(lin, precision),
            touching: self.touching(p, lin, axis, precision),
        }
    }

    fn triangle_bounds(lin: Linear<T>, precision: T) -> bool {
        let one = nalgebra::one::<T>();
        lin.s >= -precision && lin.t >= -precision && lin.s + lin.t <= one + precision
    }

    fn cone_bounds(lin: Linear<T>, precision: T) -> bool {
        let one = nalgebra::one::<T>();
        lin.s >= -precision
            && lin.t >= -precision
            && lin.s <= one + precision
            && lin.t <= one + precision
    }

    // ── comparison ──

    /// Returns `true` if `p` lies in the plane.
    #[must_use]
    pub fn touch(&self, p: &Vector<T>, precision: T) -> bool {
        let lin = self.linear_projected(p, self.view_axis());
        p.equal(&self.point_at(lin), precision)
    }

    /// Returns `true` if both describe the same geometric plane.
    #[must_use]
    pub fn equal(&self, p: &Self, precision: T) -> bool {
        p.touch(&self.origin, precision) && self.normal().parallel(&p.normal(), precision)
    }

    /// Returns `true` if origin and both spans are equal.
    #[must_use]
    pub fn identical(&self, p: &Self, precision: T) -> bool {
        p.origin.equal(&self.origin, precision)
            && p.span_a.equal(&self.span_a, precision)
            && p.span_b.equal(&self.span_b, precision)
    }

    // ── intersections ──

    /// Line along which the plane crosses the plane `axis = value`.
    ///
    /// The span with the larger `axis` component is eliminated, the other one
    /// gives the direction. Invalid with a default line if the plane is
    /// parallel to the axis plane.
    #[must_use]
    pub fn intersect_axis_plane(&self, axis: Axis, value: T, precision: T) -> Solution<Line<T>> {
        let (x0, x1) = if self.span_a[axis].abs() >= self.span_b[axis].abs() {
            (self.span_a, self.span_b)
        } else {
            (self.span_b, self.span_a)
        };
        if x0[axis].abs() <= precision {
            trace!(%axis, "plane is parallel to the axis plane");
            return Solution::invalid(Line::default(), Degeneracy::Parallel);
        }

        let origin = self.origin + x0 * ((value - self.origin[axis]) / x0[axis]);
        let direction = x1 - x0 * (x1[axis] / x0[axis]);
        Solution::Valid(Line::new(
            origin.with_component(axis, value),
            direction.with_component(axis, nalgebra::zero()),
        ))
    }

    /// Line along which the two planes cross.
    ///
    /// The line is built in `p` from the span of `p` that is less parallel to
    /// this plane. Invalid with a default line if the planes are parallel.
    #[must_use]
    pub fn intersect_plane(&self, p: &Self, precision: T) -> Solution<Line<T>> {
        let n = self.normal();
        let da = n.dot(&p.span_a);
        let db = n.dot(&p.span_b);
        if da.abs() <= precision && db.abs() <= precision {
            trace!(%da, %db, "planes are parallel");
            return Solution::invalid(Line::default(), Degeneracy::Parallel);
        }

        let (x2, x3, d2) = if da.abs() >= db.abs() {
            (p.span_a, p.span_b, da)
        } else {
            (p.span_b, p.span_a, db)
        };
        let origin = p.origin + x2 * ((self.origin - p.origin).dot(&n) / d2);
        let direction = x3 - x2 * (x3.dot(&n) / d2);
        Solution::Valid(Line::new(origin, direction))
    }

    /// Coefficients `(s, t)` of this plane at which `l` crosses it.
    ///
    /// Invalid with sentinel `(0, 0)` if the line runs parallel to the plane.
    #[must_use]
    pub fn intersect_line_factors(&self, l: &Line<T>, precision: T) -> Solution<Linear<T>> {
        let d = l.direction();
        let divisor = self.normal().dot(d);
        if divisor.abs() <= precision {
            trace!(%divisor, "line is parallel to the plane");
            return Solution::invalid(Linear::zero(), Degeneracy::Parallel);
        }

        let w = self.origin - *l.origin();
        let s = w.dot(&d.cross(&self.span_b)) / divisor;
        let t = w.dot(&self.span_a.cross(d)) / divisor;
        Solution::Valid(Linear::new(s, t))
    }

    /// Point at which `l` crosses the plane.
    ///
    /// Invalid with the zero vector as sentinel if the line runs parallel to
    /// the plane.
    #[must_use]
    pub fn intersect_line(&self, l: &Line<T>, precision: T) -> Solution<Vector<T>> {
        let n = self.normal();
        let divisor = n.dot(l.direction());
        if divisor.abs() <= precision {
            trace!(%divisor, "line is parallel to the plane");
            return Solution::invalid(Vector::zero(), Degeneracy::Parallel);
        }

        let f = (self.origin - *l.origin()).dot(&n) / divisor;
        Solution::Valid(l.point(f))
    }
}

impl<T: Real> Default for Plane<T> {
    fn default() -> Self {
        Self::new(Vector::zero(), Vector::zero(), Vector::zero())
    }
}
