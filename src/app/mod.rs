pub mod action;
pub mod config;
pub mod context;
pub mod controller;
pub mod effect;
pub mod persistence;
pub mod reducer;
pub mod state;
pub mod validate;
