use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, container, icon, text};

use crate::app::AppMsg;
use crate::fl;

/// Shown when detection finished without a single controllable display.
pub fn empty_state_view() -> Element<'static, AppMsg> {
    container(
        column()
            .spacing(12)
            .align_x(Alignment::Center)
            .push(
                icon::from_name("video-display-symbolic")
                    .size(64)
                    .symbolic(true),
            )
            .push(text(fl!("no-displays")).size(14)),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([40, 20])
    .into()
}
