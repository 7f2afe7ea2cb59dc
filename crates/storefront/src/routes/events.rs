//! Server-sent stream of content changes.

use axum::{
    extract::State,
    response::{
        Sse,
        sse::{Event, KeepAlive},
    },
};
use showroom_content::{ContentChange, Lagged};

use crate::error::add_breadcrumb;
use crate::state::AppState;

/// Event name sent when changes were dropped for a slow client.
pub const RESYNC_EVENT: &str = "resync";

/// Stream every committed edit. The event name is the record's storage key
/// and the data is the new record as JSON.
///
/// A client that falls behind receives a `resync` event instead of the
/// changes it missed and should fetch `/` again.
///
/// GET /events
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, axum::Error>>> {
    add_breadcrumb("events", "Subscribed to content changes");
    let subscription = state.editor_repository().notifier().subscribe();

    let events = futures::stream::unfold(subscription, |mut subscription| async move {
        let event = match subscription.next().await? {
            Ok(change) => to_event(&change),
            Err(lagged) => Ok(resync_event(lagged)),
        };
        Some((event, subscription))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

fn to_event(change: &ContentChange) -> Result<Event, axum::Error> {
    let event = Event::default().event(change.key());
    match change {
        ContentChange::Theme(theme) => event.json_data(theme),
        ContentChange::Product(product) => event.json_data(product.as_ref()),
    }
}

fn resync_event(lagged: Lagged) -> Event {
    Event::default()
        .event(RESYNC_EVENT)
        .data(lagged.skipped.to_string())
}
