//! Test-only frame source that replays a scripted sequence of acquisitions.

use std::collections::VecDeque;

use crate::device::{Acquire, FrameSource};

#[derive(Debug, Default, PartialEq)]
pub(crate) struct FakeFrame {
    pub commands: Vec<&'static str>,
}

/// Replays scripted acquisitions and records every presented frame.
///
/// Once the script runs out, every acquisition is a skip.
pub(crate) struct ScriptedSource {
    script: VecDeque<Acquire<FakeFrame>>,
    pub presented: Vec<FakeFrame>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Acquire<FakeFrame>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            presented: Vec::new(),
        }
    }

    pub fn ready(n: usize) -> Self {
        Self::new((0..n).map(|_| Acquire::Ready(FakeFrame::default())))
    }
}

impl FrameSource for ScriptedSource {
    type Frame = FakeFrame;

    fn acquire(&mut self) -> Acquire<FakeFrame> {
        self.script.pop_front().unwrap_or(Acquire::Skip)
    }

    fn present(&mut self, frame: FakeFrame) {
        self.presented.push(frame);
    }
}
