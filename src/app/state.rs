use cosmic::app::Core;
use tokio::sync::mpsc::UnboundedSender;

use crate::monitor::{DisplayId, DisplayRecord, EventToSub};

/// Live state for one display's slider.
///
/// The detection record seeds this once; afterwards the slider is the sole
/// source of truth for the displayed value. Nothing is ever written back
/// into the detection result, and the device is never re-read.
#[derive(Debug, Clone)]
pub struct SliderState {
    pub name: String,
    pub bus: DisplayId,
    pub max_brightness: u16,
    /// Last displayed slider position. Kept fractional because the widget
    /// reports fractional positions; commits truncate.
    pub value: f32,
}

impl SliderState {
    /// Re-seed the displayed value after a rounding toggle. Clamped so
    /// rounding up at the top of the range cannot carry past the device's
    /// reported maximum.
    pub fn apply_rounding(&mut self, round_to_five: bool) {
        self.value = carry_value(self.value, round_to_five).min(f32::from(self.max_brightness));
    }
}

/// Carried-forward slider value after a rounding toggle. Turning rounding
/// on snaps to the nearest multiple of 5; turning it off keeps the value
/// as-is.
pub fn carry_value(value: f32, round_to_five: bool) -> f32 {
    if round_to_five {
        (value / 5.0).round() * 5.0
    } else {
        value
    }
}

/// Integer actually written to the device: the slider position truncated,
/// not rounded.
pub fn commit_value(value: f32) -> u16 {
    value as u16
}

pub struct AppState {
    pub core: Core,
    /// `None` until the detection subscription reports in; an empty vec is
    /// the user-visible "no compatible displays" condition.
    pub sliders: Option<Vec<SliderState>>,
    pub round_to_five: bool,
    pub(super) sender: Option<UnboundedSender<EventToSub>>,
}

impl AppState {
    pub fn new(core: Core) -> Self {
        AppState {
            core,
            sliders: None,
            round_to_five: true,
            sender: None,
        }
    }

    pub fn slider_step(&self) -> f32 {
        if self.round_to_five { 5.0 } else { 1.0 }
    }

    pub fn send(&self, event: EventToSub) {
        if let Some(sender) = &self.sender {
            if let Err(err) = sender.send(event) {
                debug!("monitor subscription is gone: {err}");
            }
        }
    }

    pub fn set_displays(
        &mut self,
        records: Vec<DisplayRecord>,
        sender: UnboundedSender<EventToSub>,
    ) {
        info!("detection finished with {} display(s)", records.len());

        self.sliders = Some(
            records
                .into_iter()
                .map(|record| SliderState {
                    name: record.name,
                    bus: record.bus,
                    max_brightness: record.max_brightness,
                    value: f32::from(record.brightness),
                })
                .collect(),
        );
        self.sender.replace(sender);
    }

    pub fn slider(&self, bus: &str) -> Option<&SliderState> {
        self.sliders.as_ref()?.iter().find(|s| s.bus == bus)
    }

    pub fn slider_mut(&mut self, bus: &str) -> Option<&mut SliderState> {
        self.sliders.as_mut()?.iter_mut().find(|s| s.bus == bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_rounds_to_nearest_five_when_enabled() {
        assert_eq!(carry_value(42.0, true), 40.0);
        assert_eq!(carry_value(43.0, true), 45.0);
        assert_eq!(carry_value(0.0, true), 0.0);
    }

    #[test]
    fn carry_keeps_value_when_disabled() {
        assert_eq!(carry_value(42.0, false), 42.0);
    }

    #[test]
    fn toggle_round_trip_re_rounds_exactly_once() {
        // On snaps to the nearest multiple of 5, the following off leaves
        // the carried value untouched.
        let on = carry_value(42.0, true);
        assert_eq!(carry_value(on, false), 40.0);
    }

    #[test]
    fn carry_never_exceeds_the_display_maximum() {
        let mut slider = SliderState {
            name: "Display 1".to_owned(),
            bus: "3".to_owned(),
            max_brightness: 98,
            value: 98.0,
        };

        slider.apply_rounding(true);

        assert_eq!(slider.value, 98.0);
    }

    #[test]
    fn commit_truncates_fractional_positions() {
        assert_eq!(commit_value(37.9), 37);
        assert_eq!(commit_value(0.0), 0);
    }
}
