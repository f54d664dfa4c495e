use async_channel::Receiver;
use log::debug;
use std::collections::BTreeSet;
use tabfeed_sections::SectionEvent;
use tabfeed_types::SectionIndex;

/// Why the feed needs another layout pass.
///
/// Variants are ordered from least to most invalidating; coalescing keeps the
/// strongest reason seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayoutReason {
    /// Items of these sections changed count or size.
    Content(BTreeSet<SectionIndex>),
    /// The surface or the layout configuration changed.
    Geometry,
    ThemeChanged,
    DataReloaded,
}

impl RelayoutReason {
    fn rank(&self) -> u8 {
        match self {
            RelayoutReason::Content(_) => 0,
            RelayoutReason::Geometry => 1,
            RelayoutReason::ThemeChanged => 2,
            RelayoutReason::DataReloaded => 3,
        }
    }

    fn merge(self, other: RelayoutReason) -> RelayoutReason {
        match (self, other) {
            (RelayoutReason::Content(mut a), RelayoutReason::Content(b)) => {
                a.extend(b);
                RelayoutReason::Content(a)
            }
            (a, b) if b.rank() > a.rank() => b,
            (a, _) => a,
        }
    }
}

impl From<SectionEvent> for RelayoutReason {
    fn from(event: SectionEvent) -> Self {
        match event {
            SectionEvent::ContentChanged(section) | SectionEvent::Dismissed(section) => {
                RelayoutReason::Content(BTreeSet::from([section]))
            }
            SectionEvent::ThemeChanged => RelayoutReason::ThemeChanged,
            SectionEvent::DataReloaded => RelayoutReason::DataReloaded,
        }
    }
}

/// Collects section events and host-side changes until the next pass.
#[derive(Debug)]
pub struct RelayoutScheduler {
    events: Receiver<SectionEvent>,
    pending: Option<RelayoutReason>,
}

impl RelayoutScheduler {
    pub fn new(events: Receiver<SectionEvent>) -> Self {
        Self {
            events,
            pending: None,
        }
    }

    /// Records a change that did not arrive as a section event.
    pub fn request(&mut self, reason: RelayoutReason) {
        self.pending = Some(match self.pending.take() {
            Some(pending) => pending.merge(reason),
            None => reason,
        });
    }

    /// Drains queued events and returns one coalesced reason, if any.
    pub fn take(&mut self) -> Option<RelayoutReason> {
        let mut drained = 0usize;
        while let Ok(event) = self.events.try_recv() {
            self.request(event.into());
            drained += 1;
        }
        let reason = self.pending.take();
        if let Some(reason) = &reason {
            debug!("Coalesced {} section events into {:?}", drained, reason);
        }
        reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabfeed_sections::event_channel;

    #[test]
    fn test_content_changes_merge_sections() {
        let (sink, receiver) = event_channel();
        let mut scheduler = RelayoutScheduler::new(receiver);
        sink.emit(SectionEvent::ContentChanged(3));
        sink.emit(SectionEvent::Dismissed(1));
        sink.emit(SectionEvent::ContentChanged(3));

        assert_eq!(
            scheduler.take(),
            Some(RelayoutReason::Content(BTreeSet::from([1, 3])))
        );
        assert_eq!(scheduler.take(), None);
    }

    #[test]
    fn test_strongest_reason_wins() {
        let (sink, receiver) = event_channel();
        let mut scheduler = RelayoutScheduler::new(receiver);
        sink.emit(SectionEvent::ContentChanged(0));
        sink.emit(SectionEvent::DataReloaded);
        sink.emit(SectionEvent::ThemeChanged);
        scheduler.request(RelayoutReason::Geometry);

        assert_eq!(scheduler.take(), Some(RelayoutReason::DataReloaded));
    }

    #[test]
    fn test_geometry_outranks_content() {
        let (_sink, receiver) = event_channel();
        let mut scheduler = RelayoutScheduler::new(receiver);
        scheduler.request(RelayoutReason::Content(BTreeSet::from([2])));
        scheduler.request(RelayoutReason::Geometry);

        assert_eq!(scheduler.take(), Some(RelayoutReason::Geometry));
    }
}
