//! Pull answers out of a stream, one at a time.

use crate::core::stream::{BindFn, Link, Stream};
use crate::error::SearchError;
use tracing::{debug, trace, warn};

/// Options for driving a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverConfig {
    /// Maximum number of suspensions forced over the driver's
    /// lifetime. `None` means unbounded.
    pub step_limit: Option<usize>,
}

impl DriverConfig {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_step_limit(limit: usize) -> Self {
        DriverConfig {
            step_limit: Some(limit),
        }
    }
}

/// Pending operation around the part of the stream being evaluated.
enum Frame<T> {
    /// The focus is the left operand of a merge with this stream.
    Mplus(Stream<T>),
    /// The focus feeds its answers through this function.
    Bind(BindFn<T>),
}

impl<T> Frame<T> {
    /// Rebuild the stream this frame came from around a forced focus.
    /// Merges swap their operands, as `Stream::mplus` does.
    fn resume(self, forced: Stream<T>) -> Stream<T> {
        match self {
            Frame::Mplus(other) => Stream::Mplus(Link::new(other), Link::new(forced)),
            Frame::Bind(g) => Stream::Bind(Link::new(forced), g),
        }
    }
}

/// Iterator over the answers of a stream.
///
/// The driver evaluates pending merges and binds with an explicit
/// stack of frames and forces suspended nodes in a loop, so
/// arbitrarily deep recursion through deferred goals does not grow
/// the call stack. Frames persist between steps: forcing one
/// suspension under a chain of binds does not walk the chain again.
/// Stopping the iteration is all it takes to cancel a search.
pub struct Driver<T> {
    focus: Stream<T>,
    frames: Vec<Frame<T>>,
    /// Positions of the merge frames in `frames`, outermost first.
    merges: Vec<usize>,
    steps: usize,
    config: DriverConfig,
}

impl<T> Driver<T> {
    pub fn new(stream: Stream<T>) -> Self {
        Self::with_config(stream, DriverConfig::default())
    }

    pub fn with_config(stream: Stream<T>, config: DriverConfig) -> Self {
        Driver {
            focus: stream,
            frames: Vec::new(),
            merges: Vec::new(),
            steps: 0,
            config,
        }
    }

    /// Number of suspensions forced so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Produce the next answer, forcing suspensions as needed.
    ///
    /// Returns `Ok(None)` once the stream is exhausted, also on every
    /// later call. Fails if the step limit runs out first; the pending
    /// suspension is kept, so the error repeats on subsequent calls.
    pub fn try_next(&mut self) -> Result<Option<T>, SearchError> {
        loop {
            match std::mem::replace(&mut self.focus, Stream::Empty) {
                Stream::Mplus(a, b) => {
                    let other = b.into_inner();
                    // merging with nothing changes nothing
                    if !other.is_empty() {
                        self.push(Frame::Mplus(other));
                    }
                    self.focus = a.into_inner();
                }
                Stream::Bind(s, g) => {
                    self.push(Frame::Bind(g));
                    self.focus = s.into_inner();
                }
                Stream::Empty => match self.pop() {
                    None => {
                        debug!(steps = self.steps, "stream exhausted");
                        return Ok(None);
                    }
                    Some(Frame::Mplus(other)) => self.focus = other,
                    Some(Frame::Bind(_)) => {}
                },
                Stream::Ready(a, rest) => match self.pop() {
                    None => {
                        self.focus = rest.into_inner();
                        debug!(steps = self.steps, "answer produced");
                        return Ok(Some(a));
                    }
                    Some(Frame::Mplus(other)) => {
                        let rest = Stream::Mplus(Link::new(other), rest);
                        self.focus = Stream::Ready(a, Link::new(rest));
                    }
                    Some(Frame::Bind(g)) => {
                        let head = (*g)(a);
                        self.focus = match rest.into_inner() {
                            Stream::Empty => head,
                            rest => {
                                let rest = Stream::Bind(Link::new(rest), g);
                                Stream::Mplus(Link::new(head), Link::new(rest))
                            }
                        };
                    }
                },
                Stream::Suspended(resume) => {
                    if let Some(limit) = self.config.step_limit {
                        if self.steps >= limit {
                            self.focus = Stream::Suspended(resume);
                            return Err(SearchError::StepLimitExceeded { limit });
                        }
                    }
                    self.steps += 1;
                    trace!(steps = self.steps, depth = self.frames.len(), "forcing suspension");
                    let forced = resume();
                    self.resume_with(forced);
                }
            }
        }
    }

    /// Continue with `forced` in place of the suspension in focus.
    ///
    /// Binds above the focus are unaffected. The outermost merge on
    /// the path swaps: its right operand becomes the focus and the
    /// rebuilt left side waits in its place.
    fn resume_with(&mut self, forced: Stream<T>) {
        let Some(&outermost) = self.merges.first() else {
            self.focus = forced;
            return;
        };
        let mut rebuilt = forced;
        while self.frames.len() > outermost + 1 {
            if let Some(frame) = self.pop() {
                rebuilt = frame.resume(rebuilt);
            }
        }
        if let Some(Frame::Mplus(other)) = self.pop() {
            self.focus = other;
        }
        self.push(Frame::Mplus(rebuilt));
    }

    fn push(&mut self, frame: Frame<T>) {
        if let Frame::Mplus(_) = frame {
            self.merges.push(self.frames.len());
        }
        self.frames.push(frame);
    }

    fn pop(&mut self) -> Option<Frame<T>> {
        let frame = self.frames.pop()?;
        if let Frame::Mplus(_) = frame {
            self.merges.pop();
        }
        Some(frame)
    }

    /// Collect up to `n` answers.
    pub fn try_take(&mut self, n: usize) -> Result<Vec<T>, SearchError> {
        let mut answers = Vec::with_capacity(n.min(64));
        while answers.len() < n {
            match self.try_next()? {
                Some(a) => answers.push(a),
                None => break,
            }
        }
        Ok(answers)
    }
}

impl<T> Iterator for Driver<T> {
    type Item = T;

    /// Like [`Driver::try_next`], but ends the iteration when the
    /// step limit runs out.
    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "search stopped");
                None
            }
        }
    }
}
