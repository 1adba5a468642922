//! Live link-status scanning.

use super::fields::{after_whitespace, leading_digits};
use crate::fabric_health::domain::LinkKey;
use std::collections::BTreeMap;

/// Substring marking a healthy link state.
pub const ACTIVE_STATE_MARKER: &str = "Active";

/// Non-active link observations from one scan, in ascending key order.
pub type DownLinkMap = BTreeMap<LinkKey, String>;

/// Extracts non-active link observations from live link-status output.
///
/// Each matching line yields `(device, port) -> state`. Lines in an
/// active state, and lines not matching the expected shape at all, carry
/// no actionable status and are dropped without error.
#[derive(Debug, Default)]
pub struct FabricScanner;

impl FabricScanner {
    pub fn scan<'a>(lines: impl IntoIterator<Item = &'a str>) -> DownLinkMap {
        let mut down_links = DownLinkMap::new();
        for line in lines {
            if let Some((key, state)) = parse_status_line(line.trim()) {
                if !state.contains(ACTIVE_STATE_MARKER) {
                    down_links.insert(key, state);
                }
            }
        }
        down_links
    }
}

/// `0x<guid> "<device-label>" <lid> <port>[..] ... (<state>) ...`
///
/// The device label is taken whole (trimmed), not split to its first
/// token: live-status labels already carry the device's short name. The
/// state is the first parenthesized token after the port brackets.
fn parse_status_line(line: &str) -> Option<(LinkKey, String)> {
    let rest = line.strip_prefix("0x")?;
    let hex_end = rest
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(rest.len());
    if hex_end == 0 {
        return None;
    }

    let rest = after_whitespace(&rest[hex_end..])?;
    let rest = rest.strip_prefix('"')?;
    let close = rest.find('"')?;
    let device = rest[..close].trim().to_string();

    let rest = after_whitespace(&rest[close + 1..])?;
    let (_lid, rest) = leading_digits(rest)?;
    let rest = after_whitespace(rest)?;
    let (port, rest) = leading_digits(rest)?;
    let rest = rest.strip_prefix('[')?;

    let open = rest.find('(')?;
    let tail = &rest[open + 1..];
    let close = tail.find(')')?;
    let state = tail[..close].trim().to_string();

    Some((LinkKey::new(device, port), state))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOWN_LINE: &str = r#"0x248a0703005cfa80 "SW1"        1    5[  ] ==( 4X 25.78125 Gbps Down/ Polling )==> [  ] "" ( )"#;
    const ACTIVE_LINE: &str = r#"0x248a0703005cfa80 "SW1"        1    7[  ] ==( 4X 25.78125 Gbps Active/  LinkUp)==>  0xb8599f0300fc6de4  9    1[  ] "node07 HCA-1" ( )"#;

    #[test]
    fn test_down_link_is_recorded() {
        let down = FabricScanner::scan([DOWN_LINE]);
        assert_eq!(down.len(), 1);
        assert_eq!(
            down.get(&LinkKey::new("SW1", "5")).unwrap(),
            "4X 25.78125 Gbps Down/ Polling"
        );
    }

    #[test]
    fn test_active_link_is_dropped() {
        let down = FabricScanner::scan([ACTIVE_LINE]);
        assert!(down.is_empty());
    }

    #[test]
    fn test_device_label_is_trimmed_but_not_split() {
        let line = r#"0x98039b03006c8a2a "  edge-sw 01  "  2   12[  ] ==( Down/ Polling )==> [  ] "" ( )"#;
        let down = FabricScanner::scan([line]);
        assert!(down.contains_key(&LinkKey::new("edge-sw 01", "12")));
    }

    #[test]
    fn test_port_stays_a_string_key() {
        let down = FabricScanner::scan([DOWN_LINE]);
        let key = down.keys().next().unwrap();
        assert_eq!(key.port, "5");
    }

    #[test]
    fn test_lines_without_status_shape_are_dropped() {
        let lines = [
            "CA: node07 HCA-1:",
            r#""SW1"  1  5[  ] ==( Down/ Polling )"#,
            "0x248a0703005cfa80 SW1 1 5 Down",
            "0x248a0703005cfa80 \"SW1\" x 5[ ] ==( Down )",
            "",
        ];
        assert!(FabricScanner::scan(lines).is_empty());
    }

    #[test]
    fn test_scan_yields_ascending_key_order() {
        let lines = [
            r#"0xb "ZZ-SW"  1   2[  ] ==( Down/ Polling )==> [  ] "" ( )"#,
            r#"0xa "AA-SW"  1   9[  ] ==( Down/ Polling )==> [  ] "" ( )"#,
            r#"0xa "AA-SW"  1   10[  ] ==( Down/ Polling )==> [  ] "" ( )"#,
        ];
        let down = FabricScanner::scan(lines);
        let keys: Vec<String> = down.keys().map(|k| format!("{}", k)).collect();
        assert_eq!(keys, vec!["AA-SW/10", "AA-SW/9", "ZZ-SW/2"]);
    }

    #[test]
    fn test_scan_empty_input() {
        let down = FabricScanner::scan(std::iter::empty::<&str>());
        assert!(down.is_empty());
    }
}
