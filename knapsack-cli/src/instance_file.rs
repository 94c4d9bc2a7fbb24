//! JSON instance files.
//!
//! ```json
//! { "capacity": 7, "items": [{ "weight": 2.0, "value": 3.0 }] }
//! ```

use std::io::{BufReader, BufWriter, Write};

use camino::Utf8Path;
use knapsack_core::Instance;
use serde::{Deserialize, Serialize};

use crate::CliError;
use crate::fs::{create_file, open_file};

/// One item as written in an instance file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct ItemRecord {
    pub(crate) weight: f64,
    pub(crate) value: f64,
}

/// On-disk form of an [`Instance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct InstanceFile {
    pub(crate) capacity: u32,
    pub(crate) items: Vec<ItemRecord>,
}

impl InstanceFile {
    /// Validate the records and number the items from 1.
    pub(crate) fn into_instance(self, path: &Utf8Path) -> Result<Instance, CliError> {
        let pairs: Vec<(f64, f64)> = self
            .items
            .iter()
            .map(|record| (record.weight, record.value))
            .collect();
        Instance::from_pairs(self.capacity, &pairs).map_err(|source| CliError::InvalidInstance {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl From<&Instance> for InstanceFile {
    fn from(instance: &Instance) -> Self {
        Self {
            capacity: instance.capacity(),
            items: instance
                .items()
                .iter()
                .map(|item| ItemRecord {
                    weight: item.weight().to_f64(),
                    value: item.value().to_f64(),
                })
                .collect(),
        }
    }
}

/// Load and validate an instance file.
pub(crate) fn load_instance(path: &Utf8Path) -> Result<Instance, CliError> {
    let file = open_file(path).map_err(|source| CliError::OpenInstance {
        path: path.to_path_buf(),
        source,
    })?;
    let record: InstanceFile = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        CliError::ParseInstance {
            path: path.to_path_buf(),
            source,
        }
    })?;
    record.into_instance(path)
}

/// Write `instance` as pretty JSON followed by a newline.
pub(crate) fn write_instance(writer: &mut dyn Write, instance: &Instance) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(&InstanceFile::from(instance))
        .map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .map_err(CliError::WriteOutput)
}

/// Save `instance` to `path`, creating parent directories as needed.
pub(crate) fn save_instance(path: &Utf8Path, instance: &Instance) -> Result<(), CliError> {
    let file = create_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_instance(&mut writer, instance)?;
    writer.flush().map_err(CliError::WriteOutput)
}
