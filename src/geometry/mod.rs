pub mod shapes;
pub mod vector;

pub use shapes::{Area, Circle, Rectangle};
pub use vector::{angle_from_y_axis, direction, Vec2};
