//! # Layered Heat Models
//!
//! Models for heat pumps and stratified thermal storage in energy system
//! optimization.
//!
//! ## Crate layout
//!
//! - [`models`]: Heat pump COP model and the multi-layer storage builder.
//! - [`support`]: Unit conversions, thermodynamic formulas, thermal losses,
//!   and numeric constraints used by models.
//!
//! ## Units
//!
//! Physical quantities at API boundaries are [`uom`] quantities. Energies
//! handed to an optimizer are reported in MWh, volumes in m³.
//!
//! ## Logging
//!
//! Registrations with an energy system or optimization model emit
//! [`tracing`] events at `DEBUG` level. The crate never installs a subscriber.

pub mod models;
pub mod support;
