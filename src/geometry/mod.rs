mod axis;
mod line;
mod linear;
mod plane;
mod solution;
mod vector;

pub use axis::Axis;
pub use line::Line;
pub use linear::Linear;
pub use plane::{Containment, Plane};
pub use solution::{Degeneracy, Solution};
pub use vector::Vector;

/// Single-precision vector.
pub type Vec3f = Vector<f32>;

/// Double-precision vector.
pub type Vec3d = Vector<f64>;

/// Single-precision line.
pub type Line3f = Line<f32>;

/// Double-precision line.
pub type Line3d = Line<f64>;

/// Single-precision plane.
pub type Plane3f = Plane<f32>;

/// Double-precision plane.
pub type Plane3d = Plane<f64>;
