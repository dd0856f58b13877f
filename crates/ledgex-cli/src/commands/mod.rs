pub mod extract;
pub mod formats;
