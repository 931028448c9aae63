//! Block data: records, the synthetic generator, the live channel and the
//! source that chooses between them.

mod block;
mod generator;
mod live;
mod source;

pub use block::{short_hash, BlockRecord, HASH_PREFIX_LEN, HASH_SUFFIX_LEN, LEADERS};
pub use generator::{BlockGenerator, HASH_BYTES, HEIGHT_STEP, TX_COUNT};
pub use live::{LiveActor, LiveEvent};
pub use source::{
    BlockSource, ConnectionState, FallbackCause, STATUS_CONNECTED, STATUS_ERROR, STATUS_LOST,
    STATUS_SIMULATED,
};
