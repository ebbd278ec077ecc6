//! Thermal system models.
//!
//! This module contains models for heat pumps and stratified thermal storage.

pub mod heat_pump;
pub mod multi_layer_storage;
