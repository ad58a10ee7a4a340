mod params;
mod participation;
mod status;

pub use params::*;
pub use participation::*;
pub use status::*;
