//! License audit core: the requirements model, classification and policies

pub mod domain;
pub mod policies;
pub mod services;
