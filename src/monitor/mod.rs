mod backend;
mod enumeration;
mod subscription;

pub use backend::{DisplayId, EventToSub};
pub use enumeration::DisplayRecord;
pub use subscription::sub;
