use super::store::RelationStore;
use crate::error::SnapshotError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

impl RelationStore {
    /// Saves the relation store to a file using the bincode format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| SnapshotError::Io {
            path: path.display().to_string(),
            message: format!("could not create file: {}", e),
        })?;
        file.write_all(&bytes).map_err(|e| SnapshotError::Io {
            path: path.display().to_string(),
            message: format!("could not write to file: {}", e),
        })?;
        log::debug!(
            "Saved {} relation rows ({} bytes) to '{}'",
            self.len(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }

    /// Loads a relation store snapshot from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(|e| SnapshotError::Io {
            path: path.display().to_string(),
            message: format!("could not open file: {}", e),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| SnapshotError::Io {
            path: path.display().to_string(),
            message: format!("could not read from file: {}", e),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Serializes the relation store into a byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard()).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Deserializes a relation store from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(store, _)| store) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}
