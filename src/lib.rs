pub mod adapters;
pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
