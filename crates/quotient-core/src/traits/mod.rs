//! Traits at the seams of the estimation engine: the backing prior store
//! and the caller-injected observer.

mod observer;
mod storage;

pub use observer::{IEstimateObserver, NoopObserver};
pub use storage::IPriorStore;
