pub mod dates;
pub mod lenient;
