//! # quotient-estimation
//!
//! Price-range estimation over pre-aggregated historical priors.
//!
//! The core problem is statistical backoff with variance control: pick the
//! most specific cohort that has data for a prospective job, then shrink
//! its quantiles toward the nearest coarser cohort when the sample is
//! small. Two entry points share all selection/blend logic:
//!
//! - [`estimate_from_rows`] — pure, over an in-memory snapshot of rows;
//! - [`EstimationEngine`] — over any [`quotient_core::traits::IPriorStore`],
//!   fetching one cohort at a time and stopping at the first hit.

pub mod engine;
pub mod index;
pub mod ladder;
pub mod observer;
pub mod shrinkage;

pub use engine::{estimate_from_rows, EstimationEngine};
pub use index::PriorIndex;
pub use ladder::FallbackStep;
pub use observer::TracingObserver;
