//! Core data models for BioBalance Vault

pub mod profile;

pub use profile::HealthProfile;
