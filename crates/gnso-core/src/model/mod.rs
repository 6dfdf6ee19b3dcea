// ── Domain model ──
//
// Types returned to RPC callers. Only the device list is decoded; every
// other operation hands back the controller's body inside a `Reply`.

pub mod device;
pub mod reply;

pub use device::{Device, DeviceType, NedKind};
pub use reply::Reply;
