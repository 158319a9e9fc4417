pub mod config;
pub mod labels;
pub mod models;
pub mod pull;
pub mod setup;

#[cfg(test)]
mod test_support;
