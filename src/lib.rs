//! mission-control - a small relational API for scientists, planets,
//! and the missions that join them

pub mod cli;
pub mod config;
pub mod entity;
pub mod migration;
pub mod rest_api;
pub mod service;
pub mod validation;
