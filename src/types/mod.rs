//! Domain newtypes: the identifier a batch starts from and the lease it
//! resolves to.

mod ids;
mod lease;

pub use ids::WellIdentifier;
pub use lease::{LeaseDescriptor, WellType};
