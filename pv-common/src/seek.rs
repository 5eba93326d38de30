use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekTarget {
    Start,
    End,
    Backward(Duration),
    Forward(Duration),
}

impl SeekTarget {
    /// Absolute position to seek to, `None` when it cannot be determined.
    ///
    /// Relative targets need the current position and are clamped to
    /// `[0, duration]` when the duration is known.
    pub fn resolve(self, position: Option<Duration>, duration: Option<Duration>) -> Option<Duration> {
        let target = match self {
            SeekTarget::Start => return Some(Duration::ZERO),
            SeekTarget::End => return duration,
            SeekTarget::Backward(step) => position?.saturating_sub(step),
            SeekTarget::Forward(step) => position?.saturating_add(step),
        };

        Some(match duration {
            Some(duration) => target.min(duration),
            None => target,
        })
    }
}
