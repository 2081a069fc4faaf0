use std::fs;
use std::path::Path;

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::ExportError;
use super::DEF_CACHE_VERSION;
use crate::models::PackedThingDef;

/// On-disk document holding one generation run's defs.
///
/// The payload carries no timestamps, so the same catalog and schema
/// version always serialize to byte-identical artifacts and checksums
/// double as regeneration checks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReclaimedDefsDoc {
    /// Wire format version for migration.
    pub version: u32,
    /// Def schema the generator ran against, e.g. "v1".
    pub schema_version: String,
    pub defs: Vec<PackedThingDef>,
}

impl ReclaimedDefsDoc {
    pub fn new(schema_version: impl Into<String>, defs: Vec<PackedThingDef>) -> Self {
        Self {
            version: DEF_CACHE_VERSION,
            schema_version: schema_version.into(),
            defs,
        }
    }
}

/// Sidecar metadata describing a written artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Def schema version, e.g. "v1".
    pub schema_version: String,
    /// SHA256 of the compressed payload, hex encoded.
    pub checksum: String,
    /// Creation time, RFC3339.
    pub created_at: String,
    /// Serialized size before compression, in bytes.
    pub original_size: u64,
    /// Compressed payload size in bytes, trailing checksum excluded.
    pub compressed_size: u64,
    /// compressed_size / original_size.
    pub compression_ratio: f64,
    /// Number of defs in the document.
    pub def_count: usize,
}

/// Serializes and compresses a document: MessagePack with field names,
/// LZ4 with prepended size, then a SHA256 checksum appended.
pub fn serialize_and_compress(doc: &ReclaimedDefsDoc) -> Result<Vec<u8>, ExportError> {
    let msgpack = to_vec_named(doc)?;
    let compressed = compress_prepend_size(&msgpack);

    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Inverse of [`serialize_and_compress`], verifying the checksum and
/// wire version on the way in.
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<ReclaimedDefsDoc, ExportError> {
    // Prepended size header plus trailing checksum.
    if bytes.len() < 4 + 32 {
        return Err(ExportError::Corrupted);
    }

    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated = hasher.finalize();
    if &calculated[..] != checksum_bytes {
        return Err(ExportError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| ExportError::Decompression)?;
    let doc: ReclaimedDefsDoc = from_slice(&msgpack)?;

    if doc.version > DEF_CACHE_VERSION {
        return Err(ExportError::VersionMismatch {
            found: doc.version,
            expected: DEF_CACHE_VERSION,
        });
    }

    Ok(doc)
}

/// Hex SHA256 of raw bytes.
pub fn checksum_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Writes `doc` to `path` and returns the written artifact's metadata.
pub fn write_artifact(
    path: &Path,
    doc: &ReclaimedDefsDoc,
) -> Result<ArtifactMetadata, ExportError> {
    let msgpack = to_vec_named(doc)?;
    let original_size = msgpack.len() as u64;

    let mut bytes = compress_prepend_size(&msgpack);
    let compressed_size = bytes.len() as u64;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hasher.finalize();
    let checksum = format!("{:x}", digest);
    bytes.extend_from_slice(&digest);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &bytes)?;

    Ok(ArtifactMetadata {
        schema_version: doc.schema_version.clone(),
        checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
        original_size,
        compressed_size,
        compression_ratio: compressed_size as f64 / original_size as f64,
        def_count: doc.defs.len(),
    })
}

/// Reads an artifact written by [`write_artifact`].
pub fn read_artifact(path: &Path) -> Result<ReclaimedDefsDoc, ExportError> {
    let bytes = fs::read(path)?;
    decompress_and_deserialize(&bytes)
}

/// Recomputes the compressed payload's checksum and compares it against
/// a metadata value.
pub fn verify_artifact(path: &Path, expected_checksum: &str) -> Result<bool, ExportError> {
    let bytes = fs::read(path)?;
    if bytes.len() < 32 {
        return Err(ExportError::Corrupted);
    }
    let (payload, _) = bytes.split_at(bytes.len() - 32);
    Ok(checksum_hex(payload) == expected_checksum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_catalog;
    use crate::diag::CollectSink;
    use crate::gen::generate_reclaimed_defs;

    fn sample_doc() -> ReclaimedDefsDoc {
        let catalog = sample_catalog().unwrap();
        let mut sink = CollectSink::default();
        let output = generate_reclaimed_defs(catalog, &mut sink);
        ReclaimedDefsDoc::new("v1", output.defs)
    }

    #[test]
    fn test_roundtrip_in_memory() {
        let doc = sample_doc();
        let bytes = serialize_and_compress(&doc).unwrap();
        let restored = decompress_and_deserialize(&bytes).unwrap();

        assert_eq!(doc, restored);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let a = serialize_and_compress(&sample_doc()).unwrap();
        let b = serialize_and_compress(&sample_doc()).unwrap();

        assert_eq!(a, b);
        assert_eq!(checksum_hex(&a), checksum_hex(&b));
    }

    #[test]
    fn test_corrupted_byte_detected() {
        let doc = sample_doc();
        let mut bytes = serialize_and_compress(&doc).unwrap();
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xFF;

        assert!(matches!(
            decompress_and_deserialize(&bytes),
            Err(ExportError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_truncated_input_detected() {
        assert!(matches!(
            decompress_and_deserialize(&[0u8; 10]),
            Err(ExportError::Corrupted)
        ));
    }

    #[test]
    fn test_future_version_rejected() {
        let mut doc = sample_doc();
        doc.version = DEF_CACHE_VERSION + 1;
        let bytes = serialize_and_compress(&doc).unwrap();

        assert!(matches!(
            decompress_and_deserialize(&bytes),
            Err(ExportError::VersionMismatch { found, expected })
                if found == DEF_CACHE_VERSION + 1 && expected == DEF_CACHE_VERSION
        ));
    }

    #[test]
    fn test_artifact_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defs").join("reclaimed.bin");
        let doc = sample_doc();

        let metadata = write_artifact(&path, &doc).unwrap();
        assert_eq!(metadata.def_count, doc.defs.len());
        assert_eq!(metadata.schema_version, "v1");
        assert!(metadata.compression_ratio > 0.0);
        assert!(metadata.compressed_size < metadata.original_size);

        let restored = read_artifact(&path).unwrap();
        assert_eq!(doc, restored);

        assert!(verify_artifact(&path, &metadata.checksum).unwrap());
        assert!(!verify_artifact(&path, "deadbeef").unwrap());
    }
}
