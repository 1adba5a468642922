use crate::fabric_health::domain::{MappingRecord, MappingTable};
use crate::shared::Result;
use std::path::Path;

/// MappingStore port for persisting and reloading the port-mapping table
///
/// This port abstracts the snapshot format; the rest of the pipeline only
/// sees typed records going in and the keyed table coming out.
pub trait MappingStore {
    /// Writes the records as a header-led delimited snapshot, sorted by
    /// `(switch name, virtual port)`.
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written.
    fn save(&self, records: &[MappingRecord], path: &Path) -> Result<()>;

    /// Loads a snapshot into its keyed in-memory form.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - A required column is missing
    fn load(&self, path: &Path) -> Result<MappingTable>;
}
