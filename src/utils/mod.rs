mod errors;
pub mod text;

pub use errors::Error;

pub type MovieshelfResult<T> = Result<T, Error>;
