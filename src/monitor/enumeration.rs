//! Detection: parse the tool's detect output into display records and read
//! each display's current/max brightness.

use super::backend::{BrightnessTool, DisplayId};

/// Marker ddcutil prints for a device that answered on the bus but cannot
/// be controlled.
const INVALID_DISPLAY_MARKER: &str = "Invalid display";

const BUS_PREFIX: &str = "/dev/i2c-";

/// Substituted when the brightness read doesn't match the expected shape.
/// The display still appears, with a guessed range.
const FALLBACK_BRIGHTNESS: u16 = 50;
const FALLBACK_MAX_BRIGHTNESS: u16 = 100;

/// One controllable display, as reported at startup. Immutable afterwards;
/// the slider widget owns the live value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub name: String,
    pub bus: DisplayId,
    pub brightness: u16,
    pub max_brightness: u16,
}

/// Enumerate displays, then read brightness for each. Returned order is the
/// tool's output order; an empty vec means no compatible displays.
pub fn detect_displays(tool: &impl BrightnessTool) -> Vec<DisplayRecord> {
    let output = tool.detect_output();
    let mut records = Vec::new();

    for (name, bus) in parse_detect_blocks(&output) {
        let (brightness, max_brightness) = parse_vcp_reply(&tool.vcp_output(&bus))
            .unwrap_or((FALLBACK_BRIGHTNESS, FALLBACK_MAX_BRIGHTNESS));

        records.push(DisplayRecord {
            name,
            bus,
            brightness,
            max_brightness,
        });
    }

    info!("detection parsed {} display record(s)", records.len());
    records
}

/// Split detect output into blank-line-separated blocks and pull
/// `(name, bus)` out of each. A block without a second line or without the
/// `/dev/i2c-` marker is dropped without a record.
fn parse_detect_blocks(output: &str) -> Vec<(String, DisplayId)> {
    output
        .trim()
        .split("\n\n")
        .filter(|block| !block.is_empty() && !block.starts_with(INVALID_DISPLAY_MARKER))
        .filter_map(|block| {
            let mut lines = block.trim().lines();
            let name = lines.next()?.trim().to_owned();
            let bus = lines.next()?.split_once(BUS_PREFIX)?.1.trim().to_owned();
            Some((name, bus))
        })
        .collect()
}

/// Extract `(current, max)` from a reply of the form
/// `... current value = N, max value = M ...`. Any deviation reads as
/// "no data" and the caller substitutes the fallback range.
fn parse_vcp_reply(output: &str) -> Option<(u16, u16)> {
    let rest = output.split("current value =").nth(1)?;
    let (current, rest) = rest.split_once(',')?;
    let max = rest.split("max value =").nth(1)?;
    // The current value must be nothing but digits up to the comma; the
    // max value only needs to start with digits.
    Some((whole_int(current)?, leading_int(max)?))
}

fn whole_int(s: &str) -> Option<u16> {
    let digits = s.trim_start();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn leading_int(s: &str) -> Option<u16> {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
