//! File-backed record store: one JSON file per collection under a root
//! directory, mirroring the keyed layout of the in-memory store.

use std::{
    fs, io,
    path::PathBuf,
};

use super::{Collection, RecordStore, StoreError};

#[derive(Clone, Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `root`, creating the directory if missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }
}

impl RecordStore for JsonFileStore {
    fn read(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path(collection)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, collection: Collection, payload: &str) -> Result<(), StoreError> {
        fs::write(self.path(collection), payload)?;
        Ok(())
    }

    fn delete(&self, collection: Collection) -> Result<(), StoreError> {
        match fs::remove_file(self.path(collection)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
