// src/quiz/mod.rs

pub mod bank;
pub mod generator;
pub mod selector;
pub mod session;
