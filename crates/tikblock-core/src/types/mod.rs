mod credential;
mod device;
mod endpoint;
mod entry;
mod feed;
mod outcome;

pub use credential::*;
pub use device::*;
pub use endpoint::*;
pub use entry::*;
pub use feed::*;
pub use outcome::*;
