//! Lazy, possibly infinite streams of answers.
//!
//! A stream is either empty, a ready answer followed by the rest of
//! the stream, or a suspension that computes the next stream state
//! when forced. Merges and binds that cannot be decided without
//! forcing something are recorded as `Mplus` and `Bind` nodes and
//! evaluated by the [`Driver`], which steps through them with an
//! explicit stack. Nothing here recurses on the native stack in
//! proportion to the recursion depth of a goal or the number of
//! answers.

use crate::core::driver::Driver;
use std::ops::Deref;
use std::rc::Rc;

pub type BindFn<T> = Rc<dyn Fn(T) -> Stream<T>>;

pub enum Stream<T> {
    Empty,
    Ready(T, Link<T>),
    Suspended(Box<dyn FnOnce() -> Stream<T>>),
    /// Fair merge of two streams that has not been looked at yet.
    Mplus(Link<T>, Link<T>),
    /// Every answer of the stream fed through the function, merged fairly.
    Bind(Link<T>, BindFn<T>),
}

/// Owned pointer to a nested stream.
///
/// Dropping a link tears the streams behind it down in a loop, so long
/// chains of answers and deeply nested merges are freed without
/// recursion.
pub struct Link<T>(Box<Stream<T>>);

impl<T> Link<T> {
    pub fn new(stream: Stream<T>) -> Self {
        Link(Box::new(stream))
    }

    pub fn into_inner(mut self) -> Stream<T> {
        std::mem::replace(&mut *self.0, Stream::Empty)
    }
}

impl<T> Deref for Link<T> {
    type Target = Stream<T>;
    fn deref(&self) -> &Stream<T> {
        &self.0
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut pending = match std::mem::replace(&mut *self.0, Stream::Empty) {
            Stream::Empty | Stream::Suspended(_) => return,
            stream => vec![stream],
        };
        while let Some(stream) = pending.pop() {
            match stream {
                Stream::Ready(_, rest) | Stream::Bind(rest, _) => pending.push(rest.into_inner()),
                Stream::Mplus(a, b) => {
                    pending.push(a.into_inner());
                    pending.push(b.into_inner());
                }
                Stream::Empty | Stream::Suspended(_) => {}
            }
        }
    }
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::ready(x, Stream::Empty)
    }

    pub fn ready(a: T, rest: Self) -> Self {
        Stream::Ready(a, Link::new(rest))
    }

    pub fn suspended(resume: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspended(Box::new(resume))
    }

    /// True only for a stream known to have no answers without
    /// forcing anything.
    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Number of answers, if the stream is fully computed.
    pub fn len(&self) -> Option<usize> {
        let mut n = 0;
        let mut next = self;
        loop {
            match next {
                Stream::Empty => return Some(n),
                Stream::Ready(_, rest) => {
                    n += 1;
                    next = &**rest;
                }
                _ => return None,
            }
        }
    }

    /// Force the stream until it holds at most `n` computed answers.
    pub fn take(self, n: usize) -> Stream<T> {
        self.into_iter().take(n).collect()
    }

    /// Force the whole stream. Never returns for infinite streams.
    pub fn take_all(self) -> Stream<T> {
        self.into_iter().collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T: 'static> Stream<T> {
    /// Fair merge of two streams.
    ///
    /// Whenever `self` produces an answer or has to be forced, the
    /// operands swap places, so both streams make progress even when
    /// one of them is infinite.
    pub fn mplus(self, other: Stream<T>) -> Self {
        match self {
            Stream::Empty => other,
            Stream::Ready(a, rest) => {
                Stream::Ready(a, Link::new(Stream::Mplus(Link::new(other), rest)))
            }
            s => Stream::Mplus(Link::new(s), Link::new(other)),
        }
    }

    /// Feed every answer of this stream through `g` and fairly merge
    /// the resulting streams.
    pub fn bind(self, g: impl 'static + Fn(T) -> Stream<T>) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            s => Stream::Bind(Link::new(s), Rc::new(g)),
        }
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Stream::Empty, |rest, a| Stream::ready(a, rest))
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = Driver<T>;
    fn into_iter(self) -> Self::IntoIter {
        Driver::new(self)
    }
}

/// Streams compare equal if their computed prefixes are equal and
/// both end in `Empty`; a suspension never equals anything.
impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        let (mut x, mut y) = (self, other);
        loop {
            match (x, y) {
                (Stream::Empty, Stream::Empty) => return true,
                (Stream::Ready(a, xs), Stream::Ready(b, ys)) if a == b => {
                    x = &**xs;
                    y = &**ys;
                }
                _ => return false,
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Ready(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Ready(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        _ => {
                            write!(f, " ...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
            _ => write!(f, "(...)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Infinite stream counting up from `n`, one suspension per element.
    fn count_from(n: i64) -> Stream<i64> {
        Stream::suspended(move || Stream::ready(n, count_from(n + 1)))
    }

    fn repeat(x: i64) -> Stream<i64> {
        Stream::suspended(move || Stream::ready(x, repeat(x)))
    }

    fn never() -> Stream<i64> {
        Stream::suspended(never)
    }

    #[test]
    fn empty_and_singleton() {
        assert!(Stream::<i64>::empty().is_empty());
        assert_eq!(Stream::singleton(1).len(), Some(1));
        assert_eq!(Stream::singleton(1).into_vec(), vec![1]);
    }

    #[test]
    fn len_is_unknown_for_suspended_tail() {
        let s = Stream::ready(1, Stream::suspended(|| Stream::Empty));
        assert_eq!(s.len(), None);
    }

    #[test]
    fn mplus_with_empty_is_identity() {
        let s: Stream<i64> = vec![1, 2].into_iter().collect();
        assert_eq!(Stream::empty().mplus(s).into_vec(), vec![1, 2]);
        let s: Stream<i64> = vec![1, 2].into_iter().collect();
        assert_eq!(s.mplus(Stream::empty()).into_vec(), vec![1, 2]);
    }

    #[test]
    fn mplus_alternates_ready_answers() {
        let a: Stream<i64> = vec![1, 3, 5].into_iter().collect();
        let b: Stream<i64> = vec![2, 4].into_iter().collect();
        assert_eq!(a.mplus(b).into_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn mplus_does_not_starve_the_second_stream() {
        let s = repeat(1).mplus(repeat(2)).take(4).into_vec();
        assert!(s.contains(&1));
        assert!(s.contains(&2));
    }

    #[test]
    fn mplus_reaches_answers_behind_a_stream_without_answers() {
        let s = never().mplus(Stream::singleton(7));
        assert_eq!(s.take(1).into_vec(), vec![7]);
    }

    #[test]
    fn bind_maps_every_answer() {
        let s: Stream<i64> = vec![1, 2, 3].into_iter().collect();
        let out = s.bind(|x| Stream::singleton(x * 10)).into_vec();
        assert_eq!(out, vec![10, 20, 30]);
    }

    #[test]
    fn bind_with_empty_goal_is_empty() {
        let s: Stream<i64> = vec![1, 2, 3].into_iter().collect();
        assert!(s.bind(|_| Stream::Empty).into_vec().is_empty());
        assert!(Stream::<i64>::Empty.bind(Stream::singleton).is_empty());
    }

    #[test]
    fn bind_interleaves_infinite_results() {
        let s: Stream<i64> = vec![1, 2].into_iter().collect();
        let out = s.bind(repeat).take(6).into_vec();
        assert!(out.contains(&1));
        assert!(out.contains(&2));
    }

    #[test]
    fn bind_over_infinite_stream_is_lazy() {
        let out = count_from(0).bind(|x| Stream::singleton(x + 1)).take(3);
        assert_eq!(out.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn take_forces_only_what_is_needed() {
        assert_eq!(count_from(0).take(0), Stream::Empty);
        assert_eq!(count_from(0).take(2).len(), Some(2));
    }

    #[test]
    fn comparison_looks_at_computed_answers() {
        let a: Stream<i64> = vec![1, 2].into_iter().collect();
        let b = Stream::ready(1, Stream::singleton(2));
        assert_eq!(a, b);
        assert_ne!(Stream::singleton(1), Stream::ready(1, never()));
    }

    #[test]
    fn debug_output_marks_suspensions() {
        assert_eq!(format!("{:?}", Stream::<i64>::Empty), "()");
        assert_eq!(format!("{:?}", never()), "(...)");
        let s = Stream::ready(1, Stream::ready(2, never()));
        assert_eq!(format!("{:?}", s), "(1 2 ...)");
        let s = Stream::singleton(1).mplus(Stream::singleton(2));
        assert_eq!(format!("{:?}", s), "(1 ...)");
    }

    #[test]
    fn merging_and_binding_do_no_work_up_front() {
        let s = Stream::singleton(1).mplus(never());
        assert_eq!(s.len(), None);
        assert!(matches!(s, Stream::Ready(1, _)));

        let s = count_from(0).bind(|_| -> Stream<i64> { unreachable!() });
        assert!(matches!(s, Stream::Bind(..)));
    }

    #[test]
    fn long_streams_drop_without_recursion() {
        let s: Stream<i64> = (0..1_000_000).collect();
        assert_eq!(s.len(), Some(1_000_000));
        drop(s);

        let nested = (0..1_000_000).fold(Stream::singleton(0), |s, i| {
            Stream::ready(i, Stream::empty()).mplus(s).bind(Stream::singleton)
        });
        drop(nested);
    }
}
