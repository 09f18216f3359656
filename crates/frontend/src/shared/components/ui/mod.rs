pub mod input;
pub mod select;

pub use input::Input;
pub use select::Select;
