use cosmic::app::Task;

use crate::monitor::EventToSub;

use super::messages::AppMsg;
use super::state::{AppState, commit_value};

impl AppState {
    pub fn update(&mut self, message: AppMsg) -> Task<AppMsg> {
        debug!("{:?}", message);

        match message {
            AppMsg::DetectionFinished(records, sender) => {
                self.set_displays(records, sender);
            }
            AppMsg::SliderMoved(bus, value) => {
                if let Some(slider) = self.slider_mut(&bus) {
                    slider.value = value;
                }
            }
            AppMsg::SliderReleased(bus) => {
                // One write per release; positions seen while dragging are
                // never committed.
                if let Some(slider) = self.slider(&bus) {
                    self.send(EventToSub::Set(bus, commit_value(slider.value)));
                }
            }
            AppMsg::RoundingToggled(enabled) => {
                // Re-seed every slider with its carried-forward value. No
                // device write happens here; the new value only reaches
                // the hardware on the next release.
                self.round_to_five = enabled;
                if let Some(sliders) = &mut self.sliders {
                    for slider in sliders {
                        slider.apply_rounding(enabled);
                    }
                }
            }
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use cosmic::app::Core;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::*;
    use crate::app::SliderState;

    fn panel_with_one_slider(value: f32) -> (AppState, UnboundedReceiver<EventToSub>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = AppState::new(Core::default());
        app.sliders = Some(vec![SliderState {
            name: "Display 1".to_owned(),
            bus: "3".to_owned(),
            max_brightness: 100,
            value,
        }]);
        app.sender = Some(tx);
        (app, rx)
    }

    fn next_write(rx: &mut UnboundedReceiver<EventToSub>) -> (String, u16) {
        let EventToSub::Set(bus, value) = rx.try_recv().expect("expected a write event");
        (bus, value)
    }

    #[test]
    fn dragging_updates_the_value_without_writing() {
        let (mut app, mut rx) = panel_with_one_slider(50.0);

        let _ = app.update(AppMsg::SliderMoved("3".to_owned(), 20.0));
        let _ = app.update(AppMsg::SliderMoved("3".to_owned(), 30.0));

        assert_eq!(app.slider("3").unwrap().value, 30.0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn each_release_commits_one_truncated_write() {
        let (mut app, mut rx) = panel_with_one_slider(50.0);

        let _ = app.update(AppMsg::SliderMoved("3".to_owned(), 37.9));
        let _ = app.update(AppMsg::SliderReleased("3".to_owned()));
        let _ = app.update(AppMsg::SliderReleased("3".to_owned()));

        // Two releases at the same position are two identical writes.
        assert_eq!(next_write(&mut rx), ("3".to_owned(), 37));
        assert_eq!(next_write(&mut rx), ("3".to_owned(), 37));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn release_for_an_unknown_bus_writes_nothing() {
        let (mut app, mut rx) = panel_with_one_slider(50.0);

        let _ = app.update(AppMsg::SliderReleased("9".to_owned()));

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn rounding_toggle_re_seeds_sliders_without_writing() {
        let (mut app, mut rx) = panel_with_one_slider(42.0);

        let _ = app.update(AppMsg::RoundingToggled(false));
        let _ = app.update(AppMsg::RoundingToggled(true));

        assert_eq!(app.slider("3").unwrap().value, 40.0);
        assert!(rx.try_recv().is_err());
    }
}
