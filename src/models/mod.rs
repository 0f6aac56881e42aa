pub mod category;
pub mod object;
pub mod product;
pub mod review;

pub use category::*;
pub use object::{ImageRef, Object, RawObject, Relation};
pub use product::*;
pub use review::*;
