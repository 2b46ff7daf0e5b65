mod axis_box;
mod plane;
mod sphere;

pub use axis_box::AxisBox;
pub use plane::Plane;
pub use sphere::Sphere;
