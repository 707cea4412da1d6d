use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::interval;

use crate::domain::weather::{Location, WeatherSnapshot};

/// Everything the event loop reacts to. Completion events carry the sequence
/// number of the request that produced them; the state machine drops any
/// completion whose sequence is not the latest issued, so an in-flight fetch
/// for an abandoned location can never overwrite fresher state.
#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    LocationResolved(Location),
    FetchCompleted {
        seq: u64,
        result: Result<WeatherSnapshot, String>,
    },
    SearchCompleted {
        seq: u64,
        result: Result<Vec<Location>, String>,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_frame_task(tx: tokio::sync::mpsc::Sender<AppEvent>, fps: u8) {
    let fps = fps.max(15);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}
