pub mod descriptor;
pub mod source;

pub use descriptor::Icon;
pub use source::IconSource;
