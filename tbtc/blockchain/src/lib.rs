pub mod blocks;
pub mod client;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod errors;
pub mod events;
pub mod keys;
pub mod mining;
pub mod proxies;
pub mod resolver;
#[cfg(test)]
mod tests;
