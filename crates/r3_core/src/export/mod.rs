// Def cache export: MessagePack + LZ4 with versioning and integrity
// checks.

pub mod error;
pub mod format;

pub use error::ExportError;
pub use format::{
    checksum_hex, decompress_and_deserialize, read_artifact, serialize_and_compress,
    verify_artifact, write_artifact, ArtifactMetadata, ReclaimedDefsDoc,
};

/// Wire format version of exported def caches.
pub const DEF_CACHE_VERSION: u32 = 1;
