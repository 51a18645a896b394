pub mod config;
pub mod db;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod filters;
pub mod handlers;
pub mod paths;
pub mod services;
pub mod session;
pub mod state;

#[cfg(test)]
pub mod testing;
