use crate::app::AppState;
use crate::localize::localize;

#[macro_use]
extern crate tracing;

mod app;
mod error;
mod localize;
mod monitor;
mod view;

fn setup_logs() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = fmt::layer().with_target(false);
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(format!(
        "warn,{}=warn",
        env!("CARGO_CRATE_NAME")
    )));

    if let Ok(journal_layer) = tracing_journald::layer() {
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .with(journal_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> cosmic::iced::Result {
    setup_logs();
    localize();

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(440.0, 320.0))
        .resizable(None);

    cosmic::app::run::<AppState>(settings, ())
}
