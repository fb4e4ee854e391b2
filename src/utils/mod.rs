pub mod logging;
pub mod numeric;

pub use numeric::parse_number;
