//! Down-link correlation and severity classification.

use super::fabric_scanner::DownLinkMap;
use crate::fabric_health::domain::{
    DeviceType, HealthIssue, HealthReport, LinkDirection, LinkKey, MappingRow, MappingTable,
    Severity,
};
use std::collections::BTreeSet;

/// Joins down-link observations against the mapping table into a
/// deduplicated, classified report.
pub struct HealthCorrelator;

impl HealthCorrelator {
    /// Correlates one scan against the mapping snapshot.
    ///
    /// Only observations whose key is present in the mapping table are
    /// reported; down ports the table knows nothing about are unused and
    /// stay silent. A physical link is reported exactly once even when
    /// both of its endpoints were observed down, whichever endpoint's
    /// line came first.
    pub fn correlate(table: &MappingTable, down_links: &DownLinkMap) -> HealthReport {
        let mut issues = Vec::new();
        let mut processed: BTreeSet<(LinkKey, LinkKey)> = BTreeSet::new();

        for (key, state) in down_links {
            let Some(source_row) = table.get(key) else {
                continue;
            };

            let peer = LinkKey::new(
                source_row.target_name.clone(),
                source_row.target_port.clone(),
            );
            if !processed.insert(link_identity(key, &peer)) {
                continue;
            }

            // The peer need not be mapped itself to count as down.
            let peer_down = down_links.contains_key(&peer);
            issues.push(classify(key, source_row, &peer, state, peer_down, table));
        }

        HealthReport { issues }
    }
}

/// Order-independent identity of a physical link.
fn link_identity(a: &LinkKey, b: &LinkKey) -> (LinkKey, LinkKey) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

/// Severity and row formatting for one validated issue.
fn classify(
    key: &LinkKey,
    source_row: &MappingRow,
    peer: &LinkKey,
    state: &str,
    peer_down: bool,
    table: &MappingTable,
) -> HealthIssue {
    let source = format!("{}(p{}/v{})", key.device, source_row.p_port, key.port);

    match DeviceType::classify(&source_row.device_type) {
        DeviceType::Switch => {
            // Physical port of the far end, when the mapping knows it.
            let target = match table.get(peer) {
                Some(peer_row) => format!(
                    "{}(p{}/v{})",
                    source_row.target_name, peer_row.p_port, source_row.target_port
                ),
                None => format!("{}(v{})", source_row.target_name, source_row.target_port),
            };
            HealthIssue {
                severity: Severity::Critical,
                source,
                state: state.to_string(),
                direction: if peer_down {
                    LinkDirection::BothDown
                } else {
                    LinkDirection::OneWay
                },
                target,
            }
        }
        DeviceType::Server => HealthIssue {
            severity: Severity::Warning,
            source,
            state: state.to_string(),
            direction: LinkDirection::OneWay,
            target: format!("{} (Server)", source_row.target_name),
        },
    }
}
