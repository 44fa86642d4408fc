//! Payment provider interface
//!
//! The contract the order management framework expects every payment provider
//! plugin to implement, along with the shared vocabulary (statuses, amount
//! units, webhook shapes, errors) used across provider implementations.
#![warn(missing_docs, missing_debug_implementations)]

pub mod api;
/// Constants used throughout the provider contract
pub mod consts;
/// Host vocabularies shared by all providers
pub mod enums;
pub mod errors;
pub mod types;
pub mod webhooks;

/// Generate a nanoid with the given prefix and length
#[inline]
pub fn generate_id(length: usize, prefix: &str) -> String {
    format!("{}-{}", prefix, nanoid::nanoid!(length, &consts::ALPHABETS))
}

/// Generate a nanoid with the given prefix and the default length
#[inline]
pub fn generate_id_with_default_len(prefix: &str) -> String {
    generate_id(consts::ID_LENGTH, prefix)
}

#[cfg(test)]
mod tests {
    #[test]
    fn generated_ids_carry_prefix_and_length() {
        let id = super::generate_id(20, "sess");
        assert!(id.starts_with("sess-"));
        assert_eq!(id.len(), "sess-".len() + 20);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(
            super::generate_id_with_default_len("init"),
            super::generate_id_with_default_len("init")
        );
    }
}
