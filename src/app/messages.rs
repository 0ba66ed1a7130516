use tokio::sync::mpsc::UnboundedSender;

use crate::monitor::{DisplayId, DisplayRecord, EventToSub};

#[derive(Clone, Debug)]
pub enum AppMsg {
    /// Sent from the subscription once startup detection completes.
    DetectionFinished(Vec<DisplayRecord>, UnboundedSender<EventToSub>),
    /// Slider dragged; updates the displayed value only.
    SliderMoved(DisplayId, f32),
    /// Slider released; commits the displayed value to the device.
    SliderReleased(DisplayId),
    /// "Round values to nearest 5" checkbox flipped.
    RoundingToggled(bool),
}
