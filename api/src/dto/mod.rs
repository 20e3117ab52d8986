pub mod error;

pub use error::ErrorResponseExt;
