//! Fabric-discovery output parsing.

use super::fields::{after_whitespace, leading_digits, next_quoted};
use super::port_map;
use crate::fabric_health::domain::{DeviceType, MappingRecord};

const DEFAULT_SWITCH_NAME: &str = "Unknown";
const DEFAULT_SWITCH_TOTAL_PORTS: u32 = 32;

/// Marker prefixes on the far-end node id of a link line.
const HOST_MARKER: &str = "H-";
const SWITCH_MARKER: &str = "S-";

/// Switch context carried across link lines until the next definition.
#[derive(Debug, Clone)]
struct SwitchContext {
    name: String,
    total_ports: u32,
}

impl Default for SwitchContext {
    fn default() -> Self {
        Self {
            name: DEFAULT_SWITCH_NAME.to_string(),
            total_ports: DEFAULT_SWITCH_TOTAL_PORTS,
        }
    }
}

/// Parses fabric-discovery output into mapping records.
///
/// The parser is a fold over the line sequence: a switch-definition line
/// updates the current switch context, a link line emits one record
/// against that context, anything else is skipped. A line is never both a
/// definition and a link.
#[derive(Debug, Default)]
pub struct TopologyParser {
    context: SwitchContext,
}

impl TopologyParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a complete discovery dump with a fresh parser.
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<MappingRecord> {
        let mut parser = Self::new();
        lines
            .into_iter()
            .filter_map(|line| parser.process_line(line))
            .collect()
    }

    /// Feeds one line, emitting a record when the line describes a link.
    pub fn process_line(&mut self, line: &str) -> Option<MappingRecord> {
        let line = line.trim();

        if let Some(context) = parse_switch_definition(line) {
            self.context = context;
            return None;
        }

        let link = parse_link(line)?;
        let (p_port, _) = port_map::physical_port(link.v_port, self.context.total_ports);
        Some(MappingRecord {
            switch_name: self.context.name.clone(),
            v_port: link.v_port,
            p_port,
            target_name: link.target_name,
            target_port: link.target_port,
            device_type: link.device_type,
        })
    }
}

/// Fields of a matched link line.
struct LinkLine {
    v_port: u32,
    device_type: DeviceType,
    target_port: String,
    target_name: String,
}

/// `Switch <total-ports> "<node-id>" # "<description>" ...`
///
/// The canonical switch name is the first whitespace token of the
/// description.
fn parse_switch_definition(line: &str) -> Option<SwitchContext> {
    let rest = line.strip_prefix("Switch")?;
    let rest = after_whitespace(rest)?;
    let (digits, rest) = leading_digits(rest)?;
    let total_ports = digits.parse().ok()?;
    let rest = after_whitespace(rest)?;
    if !rest.starts_with('"') {
        return None;
    }
    let (_node_id, rest) = next_quoted(rest)?;
    let rest = rest.trim_start().strip_prefix('#')?;
    let rest = rest.trim_start();
    if !rest.starts_with('"') {
        return None;
    }
    let (label, _) = next_quoted(rest)?;
    let name = label.split_whitespace().next()?.to_string();
    Some(SwitchContext { name, total_ports })
}

/// `[<v-port>] "<H-|S-><node-id>"[<target-port>] ... # "<description>" ...`
///
/// Link lines inside a host block carry a parenthesized port GUID right
/// after the port brackets instead of a quoted node id; those do not
/// match here and leave the switch context untouched.
fn parse_link(line: &str) -> Option<LinkLine> {
    let rest = line.strip_prefix('[')?;
    let (digits, rest) = leading_digits(rest)?;
    let v_port = digits.parse().ok()?;
    let rest = rest.strip_prefix(']')?;
    let rest = after_whitespace(rest)?;
    let rest = rest.strip_prefix('"')?;

    let (device_type, rest) = if let Some(rest) = rest.strip_prefix(HOST_MARKER) {
        (DeviceType::Server, rest)
    } else if let Some(rest) = rest.strip_prefix(SWITCH_MARKER) {
        (DeviceType::Switch, rest)
    } else {
        return None;
    };

    let bracket = rest.find('[')?;
    let (digits, rest) = leading_digits(&rest[bracket + 1..])?;
    let target_port = digits.to_string();
    let rest = rest.strip_prefix(']')?;

    let hash = rest.find('#')?;
    let rest = rest[hash + 1..].trim_start();
    if !rest.starts_with('"') {
        return None;
    }
    let (label, _) = next_quoted(rest)?;
    let target_name = label.split_whitespace().next()?.to_string();

    Some(LinkLine {
        v_port,
        device_type,
        target_port,
        target_name,
    })
}
