mod allocatable;
mod fixed;
mod view;

pub use allocatable::Allocatable;
pub use fixed::{Dimension, Fixed, Tensor};
pub use view::{View, ViewMut};
pub(crate) use view::check_position;
