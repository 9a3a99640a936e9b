pub mod disk;
pub mod seed;
pub mod store;

pub use disk::{DiskSlots, MemorySlots, SlotBackend};
pub use seed::{open_seeded, sample_records};
pub use store::{FileStore, Startup, SubscriptionId, DEFAULT_SLOT_KEY};
