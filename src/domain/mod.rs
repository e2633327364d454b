pub mod listing;
pub mod order;
pub mod organization;
pub mod profile;

pub use listing::*;
pub use order::*;
pub use organization::*;
pub use profile::*;
