//! Signature Studio: a teaching simulator for wallets, document hashing and
//! digital signatures, served over a small JSON API.

pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
