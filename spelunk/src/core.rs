// src/core.rs
pub mod classifier;
pub mod ignore;
pub mod report;
pub mod scanner;
pub mod spelunk;
