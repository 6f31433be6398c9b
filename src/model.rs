pub use self::{address::*, amount::*, summary::*, time::*};

mod address;
pub(crate) mod amount;
mod summary;
pub(crate) mod time;
