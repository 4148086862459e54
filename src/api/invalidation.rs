use serde::{Deserialize, Serialize};

/// Reason a repaint was requested.
///
/// `Data` and `Viewport` both rebuild the scales. `Tooltip` only repaints
/// the indicator and overlay on top of the cached scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Data,
    Viewport,
    Tooltip,
    Style,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Data => 1 << 0,
            Self::Viewport => 1 << 1,
            Self::Tooltip => 1 << 2,
            Self::Style => 1 << 3,
        }
    }
}

/// Bitmask of pending invalidation topics, coalesced until the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Data.bit()
        | InvalidationTopic::Viewport.bit()
        | InvalidationTopic::Tooltip.bit()
        | InvalidationTopic::Style.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    /// Whether the pending topics require new scales.
    #[must_use]
    pub const fn affects_scales(self) -> bool {
        self.contains_topic(InvalidationTopic::Data)
            || self.contains_topic(InvalidationTopic::Viewport)
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    pub fn insert(&mut self, topic: InvalidationTopic) {
        *self = self.with_topic(topic);
    }

    /// Returns the pending topics and resets to none.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidationTopic, InvalidationTopics};

    #[test]
    fn tooltip_alone_keeps_scales() {
        let topics = InvalidationTopics::from_topic(InvalidationTopic::Tooltip);
        assert!(!topics.affects_scales());
        assert!(topics.with_topic(InvalidationTopic::Viewport).affects_scales());
    }

    #[test]
    fn take_drains_pending_topics() {
        let mut topics = InvalidationTopics::none();
        topics.insert(InvalidationTopic::Data);
        let drained = topics.take();
        assert!(drained.contains_topic(InvalidationTopic::Data));
        assert!(topics.is_none());
        assert!(!InvalidationTopics::all().take().is_none());
    }
}
