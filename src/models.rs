//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently only
//! `thermal`). A model that evaluates a single operating point implements
//! [`twine_core::Model`]; models that add components to an external energy
//! system are driven through the traits they define instead.

pub mod thermal;
