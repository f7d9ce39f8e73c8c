// src/store/mod.rs

pub mod attempts;
pub mod profiles;
