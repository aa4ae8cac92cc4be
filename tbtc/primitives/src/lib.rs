#![warn(clippy::missing_docs_in_private_items)]

/// Base constants.
pub mod constants;
/// Base deserializers.
pub mod deserializers;
/// Base serializers.
pub mod serializers;
#[cfg(test)]
mod tests;
/// ABI tuple helpers.
pub mod tokens;
/// Base types.
pub mod types;
