mod attribute;
mod contract;

pub use attribute::NameAttribute;
pub use contract::{NNS, AVATAR_KEY};
