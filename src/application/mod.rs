//! Application layer: the reconciliation calculations themselves.
//!
//! Everything here is a pure function over its inputs. No state is kept
//! between calls, so results are identical for identical arguments.

pub mod normalize;
pub mod reconcile;
pub mod validate;
