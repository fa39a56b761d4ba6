//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod predictions;
pub mod router;
pub mod state;
pub mod types;
pub mod web;

#[cfg(test)]
mod test_support;

pub use router::create_router;
pub use state::AppState;
