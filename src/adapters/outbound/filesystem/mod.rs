//! Filesystem adapters for the persisted mapping table.

mod csv_store;

pub use csv_store::CsvMappingStore;

use chrono::Local;

/// Builds the dated snapshot file name `<prefix>_YYYYMMDD.csv` from the
/// current local date, so historical snapshots never overwrite each
/// other. Keeping the undated name pointed at the latest snapshot is an
/// operational step outside this tool.
pub fn dated_snapshot_name(prefix: &str) -> String {
    format!("{}_{}.csv", prefix, Local::now().format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_snapshot_name_shape() {
        let name = dated_snapshot_name("full_port_mapping");
        assert!(name.starts_with("full_port_mapping_"));
        assert!(name.ends_with(".csv"));

        let date_part = name
            .trim_start_matches("full_port_mapping_")
            .trim_end_matches(".csv");
        assert_eq!(date_part.len(), 8);
        assert!(date_part.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_dated_snapshot_name_uses_prefix() {
        assert!(dated_snapshot_name("lab_fabric").starts_with("lab_fabric_"));
    }
}
