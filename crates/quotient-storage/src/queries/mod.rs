//! Raw SQL operations, grouped per concern.

pub mod prior_ops;
pub mod schema;
