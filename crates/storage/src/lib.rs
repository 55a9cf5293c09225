//! [`MediaStore`](maya_core::storage::MediaStore) implementations.
//!
//! - [`s3::S3MediaStore`] -- any S3-compatible bucket (AWS, Supabase Storage, MinIO).
//! - [`memory::InMemoryMediaStore`] -- process-local map for tests and local runs.

pub mod memory;
pub mod s3;

pub use memory::InMemoryMediaStore;
pub use s3::{S3MediaStore, S3StoreConfig};

/// Join a public base URL and an object key, percent-encoding the key.
pub(crate) fn join_public_url(base: &str, key: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        urlencoding::encode(key)
    )
}

#[cfg(test)]
mod tests {
    use super::join_public_url;

    #[test]
    fn encodes_key_and_trims_slash() {
        assert_eq!(
            join_public_url("https://cdn.example.com/media/", "1700-my logo.png"),
            "https://cdn.example.com/media/1700-my%20logo.png"
        );
    }
}
