use cosmic::Element;
use cosmic::widget::checkbox;

use crate::app::{AppMsg, AppState};
use crate::fl;

impl AppState {
    /// Panel-wide resolution toggle. Flipping it re-seeds every slider
    /// with its carried-forward value; nothing is written to the devices.
    pub fn rounding_toggle_view(&self) -> Element<'_, AppMsg> {
        checkbox(fl!("round-to-five"), self.round_to_five)
            .on_toggle(AppMsg::RoundingToggled)
            .into()
    }
}
