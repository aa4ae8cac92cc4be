mod blocks;
mod config;
mod keys;
mod nonce;
mod resolver;
mod subscriptions;
