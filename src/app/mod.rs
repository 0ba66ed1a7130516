mod messages;
mod state;
mod update;

pub use messages::AppMsg;
pub use state::{AppState, SliderState, carry_value, commit_value};

use cosmic::Element;
use cosmic::app::{Core, Task};
use cosmic::iced::Subscription;
use cosmic::widget::text;

use crate::fl;

pub const APPID: &str = "io.github.cosmic_utils.cosmic-brightness-control";

impl cosmic::Application for AppState {
    type Executor = cosmic::executor::Default;
    type Flags = ();
    type Message = AppMsg;
    const APP_ID: &'static str = APPID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, _flags: Self::Flags) -> (Self, Task<Self::Message>) {
        (AppState::new(core), Task::none())
    }

    fn header_center(&self) -> Vec<Element<Self::Message>> {
        vec![text::heading(fl!("app-title")).into()]
    }

    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        self.update(message)
    }

    fn view(&self) -> Element<Self::Message> {
        self.content_view()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        Subscription::run(crate::monitor::sub)
    }
}
