mod empty_state;
mod monitor_item;
mod rounding;

use cosmic::iced::Length;
use cosmic::widget::{column, container, text};
use cosmic::{Element, cosmic_theme, theme};

use crate::app::{AppMsg, AppState};
use crate::fl;

use empty_state::empty_state_view;

impl AppState {
    /// Whole window content: one section per display with the rounding
    /// checkbox underneath, or the empty-state message.
    pub fn content_view(&self) -> Element<'_, AppMsg> {
        let cosmic_theme::Spacing {
            space_s, space_m, ..
        } = theme::spacing();

        let Some(sliders) = &self.sliders else {
            // Detection hasn't reported yet.
            return container(text(fl!("detecting")).size(14))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding([40, 20])
                .into();
        };

        if sliders.is_empty() {
            return empty_state_view();
        }

        column()
            .padding(space_m)
            .spacing(space_s)
            .extend(sliders.iter().map(|slider| self.monitor_view(slider)))
            .push(self.rounding_toggle_view())
            .into()
    }
}
