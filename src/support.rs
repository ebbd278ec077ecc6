//! Supporting utilities used by models.
//!
//! These modules are part of the public API because they are useful on their
//! own, but their APIs are not stable.

pub mod constraint;
pub mod profile;
pub mod thermal_loss;
pub mod thermo;
pub mod units;
