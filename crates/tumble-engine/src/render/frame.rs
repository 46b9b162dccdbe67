use crate::device::{Acquire, FrameSource};

/// What happened to one requested frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// Commands were encoded, submitted and the drawable presented.
    Presented,
    /// No drawable was available; nothing was encoded or submitted.
    Skipped,
    /// The frame source is gone for good; the host should shut down.
    Fatal,
}

/// Acquires a drawable from `source`, lets `encode` record into it, then presents.
///
/// `encode` only runs when a drawable exists, so a skipped frame performs no
/// submission at all.
pub fn render_with<S, F>(source: &mut S, encode: F) -> FrameOutcome
where
    S: FrameSource + ?Sized,
    F: FnOnce(&mut S::Frame),
{
    match source.acquire() {
        Acquire::Ready(mut frame) => {
            encode(&mut frame);
            source.present(frame);
            FrameOutcome::Presented
        }
        Acquire::Skip => {
            log::trace!("no drawable; frame skipped");
            FrameOutcome::Skipped
        }
        Acquire::Fatal => {
            log::error!("frame source failed; cannot render");
            FrameOutcome::Fatal
        }
    }
}
