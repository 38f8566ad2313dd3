pub mod error;
pub mod geometry;
pub mod math;
mod text;

pub use error::{GeometryError, NumgeomError, ParseError, Result};
pub use geometry::{
    Axis, Containment, Degeneracy, Line, Line3d, Line3f, Linear, Plane, Plane3d, Plane3f,
    Solution, Vec3d, Vec3f, Vector,
};
pub use math::Real;
