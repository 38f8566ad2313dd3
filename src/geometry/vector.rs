use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::{self, angle_diff, compare, lit, to_degree, to_radian, Point3, Real, Vector3};

use super::{Axis, Line, Plane};

/// A 3-component vector, used both as a point and as a direction.
///
/// Vectors are plain values: every operation returns a new vector. The zero
/// vector is meaningful and doubles as the "undefined" sentinel of solvers.
///
/// Components are reachable by name ([`x`](Self::x)) and by computed index
/// (`v[Axis::Z]`, `v[2]`).
#[derive(Debug, Clone, Copy)]
pub struct Vector<T> {
    c: Vector3<T>,
}

impl<T: Real> Vector<T> {
    /// Creates a new vector from its components.
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self {
            c: Vector3::new(x, y, z),
        }
    }

    /// Creates a vector with all three components set to `f`.
    #[must_use]
    pub fn splat(f: T) -> Self {
        Self::new(f, f, f)
    }

    /// Returns the zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            c: Vector3::zeros(),
        }
    }

    /// Creates a vector of length `len` along `axis`.
    #[must_use]
    pub fn axis(axis: Axis, len: T) -> Self {
        Self::zero().with_component(axis, len)
    }

    /// Creates a vector of length `len` along the X axis.
    #[must_use]
    pub fn axis_x(len: T) -> Self {
        Self::axis(Axis::X, len)
    }

    /// Creates a vector of length `len` along the Y axis.
    #[must_use]
    pub fn axis_y(len: T) -> Self {
        Self::axis(Axis::Y, len)
    }

    /// Creates a vector of length `len` along the Z axis.
    #[must_use]
    pub fn axis_z(len: T) -> Self {
        Self::axis(Axis::Z, len)
    }

    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> T {
        self.c[0]
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> T {
        self.c[1]
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z(&self) -> T {
        self.c[2]
    }

    /// Returns the component along `axis`.
    #[must_use]
    pub fn component(&self, axis: Axis) -> T {
        self.c[axis.index()]
    }

    /// Returns a copy with the component along `axis` replaced by `value`.
    #[must_use]
    pub fn with_component(mut self, axis: Axis, value: T) -> Self {
        self.c[axis.index()] = value;
        self
    }

    /// Returns the components as an array.
    #[must_use]
    pub fn to_array(&self) -> [T; 3] {
        [self.c[0], self.c[1], self.c[2]]
    }

    // ── algebra ──

    /// Dot product.
    #[must_use]
    pub fn dot(&self, v: &Self) -> T {
        self.c.dot(&v.c)
    }

    /// Right-handed cross product `self x v`.
    #[must_use]
    pub fn cross(&self, v: &Self) -> Self {
        Self {
            c: self.c.cross(&v.c),
        }
    }

    /// A single component of the cross product, without computing the others.
    #[must_use]
    pub fn cross_component(&self, axis: Axis, v: &Self) -> T {
        let (j, k) = axis.others();
        self.c[j] * v.c[k] - self.c[k] * v.c[j]
    }

    /// Squared length.
    #[must_use]
    pub fn len_squared(&self) -> T {
        self.dot(self)
    }

    /// Length.
    #[must_use]
    pub fn len(&self) -> T {
        self.len_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Undefined for the zero vector (the components become NaN); check
    /// [`is_zero`](Self::is_zero) first.
    #[must_use]
    pub fn norm(&self) -> Self {
        *self / self.len()
    }

    /// Angle between `self` and `v` in `[0, 180]` degrees.
    #[must_use]
    pub fn angle(&self, v: &Self) -> T {
        let one = nalgebra::one::<T>();
        let ratio = self.dot(v) / (self.len_squared() * v.len_squared()).sqrt();

        // rounding can push the ratio just outside the domain of acos
        to_degree(ratio.clamp(-one, one).acos())
    }

    /// Axis of the component with the largest magnitude (first one on ties).
    #[must_use]
    pub fn largest_axis(&self) -> Axis {
        let mut index = 0;
        for i in 1..3 {
            if self.c[index].abs() < self.c[i].abs() {
                index = i;
            }
        }
        Axis::from_index(index)
    }

    /// Axis of the component with the smallest magnitude (first one on ties).
    #[must_use]
    pub fn smallest_axis(&self) -> Axis {
        let mut index = 0;
        for i in 1..3 {
            if self.c[index].abs() > self.c[i].abs() {
                index = i;
            }
        }
        Axis::from_index(index)
    }

    /// Copy with the component along `axis` replaced, i.e. the vector
    /// projected onto the axis-aligned plane at `value`.
    #[must_use]
    pub fn flatten(&self, axis: Axis, value: T) -> Self {
        self.with_component(axis, value)
    }

    /// Rotates by `degrees` counter-clockwise around `axis`, looking down the
    /// axis towards the origin.
    #[must_use]
    pub fn rotate(&self, axis: Axis, degrees: T) -> Self {
        let rad = to_radian(degrees);
        let (sa, ca) = (rad.sin(), rad.cos());
        let (j, k) = axis.others();

        let mut out = *self;
        out.c[j] = self.c[j] * ca - self.c[k] * sa;
        out.c[k] = self.c[j] * sa + self.c[k] * ca;
        out
    }

    /// Rotates around the X axis, see [`rotate`](Self::rotate).
    #[must_use]
    pub fn rotate_x(&self, degrees: T) -> Self {
        self.rotate(Axis::X, degrees)
    }

    /// Rotates around the Y axis, see [`rotate`](Self::rotate).
    #[must_use]
    pub fn rotate_y(&self, degrees: T) -> Self {
        self.rotate(Axis::Y, degrees)
    }

    /// Rotates around the Z axis, see [`rotate`](Self::rotate).
    #[must_use]
    pub fn rotate_z(&self, degrees: T) -> Self {
        self.rotate(Axis::Z, degrees)
    }

    /// Signed angle in `(-180, 180]` to rotate `self` around `axis` so that it
    /// matches `v`, both viewed along that axis.
    #[must_use]
    pub fn angle_around(&self, axis: Axis, v: &Self) -> T {
        let zero = nalgebra::zero::<T>();
        let flat = self.flatten(axis, zero);
        let target = v.flatten(axis, zero);

        let angle = flat.angle(&target);
        let signed = if flat.cross_component(axis, &target) < zero {
            -angle
        } else {
            angle
        };
        // a half turn with a noisy negative sign
        angle_diff(zero, signed)
    }

    /// Line from `self` through `p`.
    #[must_use]
    pub fn line(&self, p: &Self) -> Line<T> {
        Line::new(*self, *p - *self)
    }

    /// Plane from `self` spanning to `p0` and `p1`.
    #[must_use]
    pub fn plane(&self, p0: &Self, p1: &Self) -> Plane<T> {
        Plane::new(*self, *p0 - *self, *p1 - *self)
    }

    /// Linear interpolation towards `p`; `t = 0` is `self`, `t = 1` is `p`.
    #[must_use]
    pub fn interpolate(&self, p: &Self, t: T) -> Self {
        *self + (*p - *self) * t
    }

    /// Factor that scales `self` to length `len`.
    #[must_use]
    pub fn rescale_factor(&self, len: T) -> T {
        ((len * len) / self.len_squared()).sqrt()
    }

    /// Vector parallel to `self` with length `len`.
    #[must_use]
    pub fn rescale(&self, len: T) -> Self {
        *self * self.rescale_factor(len)
    }

    /// Factor that scales `self` onto `v`, read off the dominant component of
    /// `self`. Only meaningful if the two are parallel.
    #[must_use]
    pub fn delta(&self, v: &Self) -> T {
        let index = self.largest_axis().index();
        v.c[index] / self.c[index]
    }

    /// `self` scaled by `f`.
    #[must_use]
    pub fn scale(&self, f: T) -> Self {
        *self * f
    }

    // ── predicates ──

    /// Returns `true` if `self` and `v` are collinear, regardless of sign.
    ///
    /// Two zero vectors are parallel; a zero and a non-zero vector are not.
    #[must_use]
    pub fn parallel(&self, v: &Self, precision: T) -> bool {
        let lens = [self.len_squared(), v.len_squared()];
        if math::is_zero(lens[0], precision) {
            return math::is_zero(lens[1], precision);
        }
        if math::is_zero(lens[1], precision) {
            return false;
        }

        // Cauchy-Schwarz holds with equality only for collinear vectors
        compare(self.dot(v).abs(), (lens[0] * lens[1]).sqrt(), precision)
    }

    /// Returns `true` if `self` and `v` are parallel with a positive factor.
    #[must_use]
    pub fn same_direction(&self, v: &Self, precision: T) -> bool {
        if !self.parallel(v, precision) {
            return false;
        }
        self.is_zero(precision) || self.dot(v) > nalgebra::zero::<T>()
    }

    /// Componentwise equality.
    #[must_use]
    pub fn equal(&self, v: &Self, precision: T) -> bool {
        (0..3).all(|i| compare(self.c[i], v.c[i], precision))
    }

    /// Returns `true` if `v` projected onto `self` has the length of `self`,
    /// i.e. `self` extended to the plane through `v` perpendicular to it ends
    /// exactly at that plane.
    #[must_use]
    pub fn matches(&self, v: &Self, precision: T) -> bool {
        compare(self.dot(v), self.len_squared(), precision)
    }

    /// Returns `true` if the vector has zero length.
    #[must_use]
    pub fn is_zero(&self, precision: T) -> bool {
        math::is_zero(self.len_squared(), precision)
    }

    /// Returns `true` if the component along `axis` is zero.
    #[must_use]
    pub fn is_zero_component(&self, axis: Axis, precision: T) -> bool {
        math::is_zero(self.component(axis), precision)
    }

    /// Returns `true` if the component along `axis` is negligible relative to
    /// the other two.
    #[must_use]
    pub fn negligible(&self, axis: Axis, precision: T) -> bool {
        let flat = self.flatten(axis, nalgebra::zero());
        compare(self.len_squared(), flat.len_squared(), precision)
    }

    /// Returns `true` if `self` and `v` are perpendicular.
    #[must_use]
    pub fn is_perpendicular(&self, v: &Self, precision: T) -> bool {
        math::is_zero(self.dot(v), precision)
    }

    /// Returns `true` if the angle to `v` is at most 90 degrees.
    #[must_use]
    pub fn is_acute_angle(&self, v: &Self, precision: T) -> bool {
        let dot = self.dot(v);
        dot >= nalgebra::zero::<T>() || math::is_zero(dot, precision)
    }

    /// Returns `true` if the angle to `v` is at least 90 degrees.
    #[must_use]
    pub fn is_obtuse_angle(&self, v: &Self, precision: T) -> bool {
        let dot = self.dot(v);
        dot <= nalgebra::zero::<T>() || math::is_zero(dot, precision)
    }

    // ── projections ──

    /// Factor that scales `self` onto the projection of `v`.
    #[must_use]
    pub fn project_factor(&self, v: &Self) -> T {
        self.dot(v) / self.len_squared()
    }

    /// Projection of `v` onto `self`.
    #[must_use]
    pub fn project(&self, v: &Self) -> Self {
        *self * self.project_factor(v)
    }

    /// The part of `v` perpendicular to `self`.
    #[must_use]
    pub fn perpendicular(&self, v: &Self) -> Self {
        *v - self.project(v)
    }

    /// Factor that scales `self` until it reaches the plane through `v`
    /// perpendicular to `v`. Undefined if `self` and `v` are perpendicular.
    #[must_use]
    pub fn reach_factor(&self, v: &Self) -> T {
        v.len_squared() / self.dot(v)
    }

    /// `self` scaled by [`reach_factor`](Self::reach_factor).
    #[must_use]
    pub fn reach(&self, v: &Self) -> Self {
        *self * self.reach_factor(v)
    }

    /// Vector perpendicular to `self` that, added to `self`, becomes parallel
    /// to `v`. Undefined if `self` and `v` are perpendicular.
    #[must_use]
    pub fn passing(&self, v: &Self) -> Self {
        v.reach(self) - *self
    }

    /// Factor, at least `1`, that scales `self` far enough to pass `v`.
    ///
    /// A perpendicular `v` can never be reached and counts as passed.
    #[must_use]
    pub fn pass_point_factor(&self, v: &Self, precision: T) -> T {
        let one = nalgebra::one::<T>();
        if math::is_zero(self.dot(v), precision) {
            return one;
        }
        self.reach_factor(v).max(one)
    }

    /// `self` scaled by [`pass_point_factor`](Self::pass_point_factor).
    #[must_use]
    pub fn pass_point(&self, v: &Self, precision: T) -> Self {
        *self * self.pass_point_factor(v, precision)
    }

    /// Centroid of `self` and two other points.
    #[must_use]
    pub fn centroid(&self, p0: &Self, p1: &Self) -> Self {
        (*self + *p0 + *p1) / lit::<T>(3.0)
    }
}

impl<T: Real> Default for Vector<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Tolerant equality at the default precision of the width.
impl<T: Real> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other, T::PRECISION)
    }
}

impl<T: Real> Add for Vector<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { c: self.c + rhs.c }
    }
}

impl<T: Real> Sub for Vector<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { c: self.c - rhs.c }
    }
}

impl<T: Real> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { c: -self.c }
    }
}

impl<T: Real> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self { c: self.c * rhs }
    }
}

impl<T: Real> Div<T> for Vector<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self { c: self.c / rhs }
    }
}

impl<T: Real> AddAssign for Vector<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.c += rhs.c;
    }
}

impl<T: Real> SubAssign for Vector<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.c -= rhs.c;
    }
}

impl<T: Real> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.c *= rhs;
    }
}

impl<T: Real> DivAssign<T> for Vector<T> {
    fn div_assign(&mut self, rhs: T) {
        self.c /= rhs;
    }
}

macro_rules! scalar_mul_impl {
    ($($t:ty),*) => {$(
        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                rhs * self
            }
        }
    )*};
}

scalar_mul_impl!(f32, f64);

impl<T: Real> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.c[index]
    }
}

impl<T: Real> Index<Axis> for Vector<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self.c[axis.index()]
    }
}

impl<T: Real> From<Vector3<T>> for Vector<T> {
    fn from(c: Vector3<T>) -> Self {
        Self { c }
    }
}

impl<T: Real> From<Vector<T>> for Vector3<T> {
    fn from(v: Vector<T>) -> Self {
        v.c
    }
}

impl<T: Real> From<Point3<T>> for Vector<T> {
    fn from(p: Point3<T>) -> Self {
        Self { c: p.coords }
    }
}

impl<T: Real> From<Vector<T>> for Point3<T> {
    fn from(v: Vector<T>) -> Self {
        Point3::from(v.c)
    }
}

impl<T: Real> From<[T; 3]> for Vector<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Real> From<Vector<T>> for [T; 3] {
    fn from(v: Vector<T>) -> Self {
        v.to_array()
    }
}
