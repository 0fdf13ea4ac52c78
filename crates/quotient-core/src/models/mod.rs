//! Request/response models for the estimation surface.

mod estimate;
mod request;

pub use estimate::PriceEstimate;
pub use request::EstimateRequest;
