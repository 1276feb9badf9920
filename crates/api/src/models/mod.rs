pub mod component;
pub mod naming;
pub mod path;

pub use component::*;
pub use naming::{ComponentViewConvention, ViewLocationConvention};
pub use path::*;
