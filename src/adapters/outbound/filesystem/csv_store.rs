use crate::fabric_health::domain::{MappingRecord, MappingRow, MappingTable};
use crate::ports::outbound::MappingStore;
use crate::shared::error::FabricError;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// CsvMappingStore adapter persisting the mapping table as a header-led
/// CSV snapshot
///
/// Rows are written sorted by `(switch name, virtual port)`. Loading
/// tolerates a UTF-8 byte-order mark and indexes rows by their trimmed
/// key fields; all other cell values are kept verbatim as strings.
pub struct CsvMappingStore;

impl CsvMappingStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvMappingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingStore for CsvMappingStore {
    fn save(&self, records: &[MappingRecord], path: &Path) -> Result<()> {
        let mut sorted: Vec<&MappingRecord> = records.iter().collect();
        sorted.sort_by(|a, b| {
            (a.switch_name.as_str(), a.v_port).cmp(&(b.switch_name.as_str(), b.v_port))
        });

        let write_error = |details: String| FabricError::ReportWriteFailed {
            path: path.to_path_buf(),
            details,
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in &sorted {
            writer
                .serialize(record)
                .map_err(|e| write_error(e.to_string()))?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| write_error(e.to_string()))?;
        fs::write(path, data).map_err(|e| write_error(e.to_string()))?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<MappingTable> {
        if !path.exists() {
            return Err(FabricError::MappingFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read mapping file: {}", path.display()))?;
        let content = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let mut rows = Vec::new();
        for result in reader.deserialize::<MappingRow>() {
            let row = result.map_err(|e| FabricError::MappingFileMalformed {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
            rows.push(row);
        }

        Ok(MappingTable::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fabric_health::domain::{DeviceType, LinkKey};
    use tempfile::TempDir;

    fn record(switch: &str, v_port: u32, target: &str, device_type: DeviceType) -> MappingRecord {
        MappingRecord {
            switch_name: switch.to_string(),
            v_port,
            p_port: v_port,
            target_name: target.to_string(),
            target_port: "1".to_string(),
            device_type,
        }
    }

    #[test]
    fn test_save_writes_sorted_header_led_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mapping.csv");

        // Deliberately unsorted input.
        let records = vec![
            record("SW-B", 1, "node02", DeviceType::Server),
            record("SW-A", 10, "SW-B", DeviceType::Switch),
            record("SW-A", 2, "node01", DeviceType::Server),
        ];
        CsvMappingStore::new().save(&records, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "Switch_Name,vPort,pPort,Target_Name,Target_Port,Device_Type"
        );
        assert_eq!(lines[1], "SW-A,2,2,node01,1,Server");
        assert_eq!(lines[2], "SW-A,10,10,SW-B,1,Switch");
        assert_eq!(lines[3], "SW-B,1,1,node02,1,Server");
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mapping.csv");

        let records = vec![
            record("SW-A", 5, "node07", DeviceType::Server),
            record("SW-A", 10, "SW-B", DeviceType::Switch),
        ];
        let store = CsvMappingStore::new();
        store.save(&records, &path).unwrap();

        let table = store.load(&path).unwrap();
        assert_eq!(table.len(), 2);

        let row = table.get(&LinkKey::new("SW-A", "5")).unwrap();
        assert_eq!(row.switch_name, "SW-A");
        assert_eq!(row.v_port, "5");
        assert_eq!(row.p_port, "5");
        assert_eq!(row.target_name, "node07");
        assert_eq!(row.target_port, "1");
        assert_eq!(row.device_type, "Server");

        let row = table.get(&LinkKey::new("SW-A", "10")).unwrap();
        assert_eq!(row.device_type, "Switch");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.csv");

        let err = CsvMappingStore::new().load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FabricError>(),
            Some(FabricError::MappingFileNotFound { .. })
        ));
    }

    #[test]
    fn test_load_missing_column_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.csv");
        fs::write(&path, "Switch_Name,vPort\nSW-A,5\n").unwrap();

        let err = CsvMappingStore::new().load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FabricError>(),
            Some(FabricError::MappingFileMalformed { .. })
        ));
    }

    #[test]
    fn test_load_tolerates_byte_order_mark() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bom.csv");
        fs::write(
            &path,
            "\u{feff}Switch_Name,vPort,pPort,Target_Name,Target_Port,Device_Type\nSW-A,5,5,node07,1,Server\n",
        )
        .unwrap();

        let table = CsvMappingStore::new().load(&path).unwrap();
        assert!(table.contains(&LinkKey::new("SW-A", "5")));
    }

    #[test]
    fn test_load_trims_key_fields_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("padded.csv");
        fs::write(
            &path,
            "Switch_Name,vPort,pPort,Target_Name,Target_Port,Device_Type\n SW-A , 5 ,5, node07 ,1,Server\n",
        )
        .unwrap();

        let table = CsvMappingStore::new().load(&path).unwrap();
        let row = table.get(&LinkKey::new("SW-A", "5")).unwrap();
        // Non-key values stay as loaded.
        assert_eq!(row.target_name, " node07 ");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let records = vec![record("SW-A", 5, "node07", DeviceType::Server)];
        let err = CsvMappingStore::new()
            .save(&records, Path::new("/nonexistent-dir/mapping.csv"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FabricError>(),
            Some(FabricError::ReportWriteFailed { .. })
        ));
    }
}
