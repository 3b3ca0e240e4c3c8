mod record;
mod result;

pub use record::*;
pub use result::*;
