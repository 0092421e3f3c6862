pub mod image;
pub mod request;

pub use self::image::*;
pub use self::request::*;
