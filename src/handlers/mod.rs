// src/handlers/mod.rs

pub mod page;
