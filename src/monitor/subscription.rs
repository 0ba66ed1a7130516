use cosmic::iced::{
    futures::{SinkExt, Stream},
    stream,
};
use tokio::sync::mpsc;

use crate::app::AppMsg;

use super::backend::{BrightnessTool, Ddcutil, EventToSub};
use super::enumeration::detect_displays;

/// Startup detection plus the write loop.
///
/// Detection runs once; afterwards the stream sits on the channel waiting
/// for commit events from the UI. An unbounded mpsc channel keeps every
/// commit: two identical releases must produce two identical writes.
pub fn sub() -> impl Stream<Item = AppMsg> {
    stream::channel(100, |mut output| async move {
        let records = tokio::task::spawn_blocking(|| detect_displays(&Ddcutil))
            .await
            .unwrap_or_else(|err| {
                error!("detection task panicked: {err}");
                Vec::new()
            });

        let (tx, mut rx) = mpsc::unbounded_channel();
        output
            .send(AppMsg::DetectionFinished(records, tx))
            .await
            .unwrap();

        while let Some(event) = rx.recv().await {
            match event {
                EventToSub::Set(bus, value) => {
                    let done =
                        tokio::task::spawn_blocking(move || Ddcutil.write_brightness(&bus, value))
                            .await;

                    match done {
                        // Ignored by design: a failed write never reaches
                        // the panel, it only lands in the logs.
                        Ok(Err(err)) => warn!("brightness write failed: {err}"),
                        Err(err) => error!("write task panicked: {err}"),
                        Ok(Ok(())) => {}
                    }
                }
            }
        }
    })
}
