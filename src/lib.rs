//! Library crate for scorepad, exposing modules for binaries and integration tests.

pub mod catalog;
pub mod config;
pub mod dao;
mod dto;
mod error;
pub mod routes;
pub mod services;
pub mod state;
mod views;
