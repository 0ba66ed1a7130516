use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, row, slider, text};
use cosmic::{cosmic_theme, theme};

use crate::app::{AppMsg, AppState, SliderState, commit_value};
use crate::fl;

impl AppState {
    /// One labeled brightness slider section.
    pub fn monitor_view(&self, state: &SliderState) -> Element<'_, AppMsg> {
        let cosmic_theme::Spacing {
            space_xxxs,
            space_s,
            ..
        } = theme::spacing();

        let bus = state.bus.clone();
        let on_change = move |value| AppMsg::SliderMoved(bus.clone(), value);

        column()
            .spacing(space_xxxs)
            .push(
                text(fl!(
                    "monitor-label",
                    name = state.name.clone(),
                    bus = state.bus.clone()
                ))
                .size(14),
            )
            .push(
                row()
                    .spacing(space_s)
                    .align_y(Alignment::Center)
                    .push(
                        slider(0.0..=f32::from(state.max_brightness), state.value, on_change)
                            .step(self.slider_step())
                            .on_release(AppMsg::SliderReleased(state.bus.clone())),
                    )
                    .push(
                        text(commit_value(state.value).to_string())
                            .size(14)
                            .width(Length::Fixed(35.0)),
                    ),
            )
            .into()
    }
}
