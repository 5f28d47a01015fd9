//! API endpoint modules.

mod address_list;
mod system;

pub use address_list::AddressListApi;
pub use system::SystemApi;
