//! Change notifications from sections to their host.

use log::debug;
use serde::Serialize;
use tabfeed_types::SectionIndex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionEvent {
    /// The section's items or their sizes changed.
    ContentChanged(SectionIndex),
    /// The user dismissed the section's content.
    Dismissed(SectionIndex),
    ThemeChanged,
    /// The whole section list was replaced.
    DataReloaded,
}

/// Sending half of the section event channel. Never blocks.
#[derive(Debug, Clone)]
pub struct EventSink {
    sender: async_channel::Sender<SectionEvent>,
}

impl EventSink {
    /// Queues `event` for the host. Returns `false` once the receiver is gone.
    pub fn emit(&self, event: SectionEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(err) => {
                debug!("Dropping section event: {}", err);
                false
            }
        }
    }
}

/// Creates an unbounded event channel.
pub fn event_channel() -> (EventSink, async_channel::Receiver<SectionEvent>) {
    let (sender, receiver) = async_channel::unbounded();
    (EventSink { sender }, receiver)
}
