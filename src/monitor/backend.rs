//! Boundary to the external display-control tool.
//!
//! Everything this program knows about a monitor comes from ddcutil's
//! stdout; DDC/CI itself is entirely the tool's problem.

use std::process::Command;

use crate::error::ExternalToolError;

/// I2C bus number of a display, as the string after `/dev/i2c-`.
pub type DisplayId = String;

const DDCUTIL: &str = "ddcutil";

/// VCP feature code for brightness.
const BRIGHTNESS_CODE: &str = "10";

/// Events the UI sends to the monitor subscription.
#[derive(Debug, Clone)]
pub enum EventToSub {
    /// Commit a brightness value for the display on the given bus.
    Set(DisplayId, u16),
}

/// Seam over the external tool so detection and commits can be exercised
/// without spawning processes.
pub trait BrightnessTool {
    /// Stdout of the detect invocation. A failed spawn reads as empty
    /// output, which detection treats as "no data to report".
    fn detect_output(&self) -> String;

    /// Stdout of the brightness read for one bus.
    fn vcp_output(&self, bus: &str) -> String;

    /// Write brightness for one bus. Callers may drop the result; a
    /// failed write is never surfaced past the logs.
    fn write_brightness(&self, bus: &str, value: u16) -> Result<(), ExternalToolError>;
}

/// The real tool, shelling out to ddcutil.
pub struct Ddcutil;

impl Ddcutil {
    fn capture(&self, args: &[&str]) -> String {
        match Command::new(DDCUTIL).args(args).output() {
            Ok(output) => {
                if !output.status.success() {
                    debug!("{DDCUTIL} {args:?} exited with {}", output.status);
                }
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            Err(err) => {
                warn!("failed to run {DDCUTIL}: {err}");
                String::new()
            }
        }
    }
}

impl BrightnessTool for Ddcutil {
    fn detect_output(&self) -> String {
        self.capture(&["detect"])
    }

    fn vcp_output(&self, bus: &str) -> String {
        self.capture(&["--bus", bus, "getvcp", BRIGHTNESS_CODE])
    }

    fn write_brightness(&self, bus: &str, value: u16) -> Result<(), ExternalToolError> {
        let value = value.to_string();
        let output = Command::new(DDCUTIL)
            .args(["--bus", bus, "setvcp", BRIGHTNESS_CODE, &value])
            .output()
            .map_err(|source| ExternalToolError::Spawn {
                command: DDCUTIL.to_owned(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExternalToolError::Failed {
                command: DDCUTIL.to_owned(),
                status: output.status,
            });
        }

        Ok(())
    }
}
