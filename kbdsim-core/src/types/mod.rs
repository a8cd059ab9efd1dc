pub mod platform;
pub mod layer;
pub mod layout;
pub mod source;

pub use platform::*;
pub use layer::*;
pub use layout::*;
pub use source::*;
