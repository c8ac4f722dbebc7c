//! Asynchronous sentence streams
//!
//! [`SharedSegmenter`] lets a producer push chunks from one task while a
//! consumer awaits sentences on another. [`sentence_stream`] adapts an
//! upstream chunk stream, such as token deltas from a language model, into
//! a stream of sentences.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::stream::{unfold, Stream, StreamExt};
use tokio::sync::Notify;
use tracing::warn;

use crate::{error::Result, segmenter::Segmenter, segmenter::SegmenterStats};

#[derive(Debug)]
struct Shared {
    segmenter: Mutex<Segmenter>,
    wake: Notify,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Segmenter> {
        self.segmenter.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cloneable handle to a segmenter shared between a producer and a consumer
///
/// Only one [`sentences`](Self::sentences) stream should be polled at a
/// time; a second concurrent consumer may miss wake-ups.
#[derive(Debug, Clone)]
pub struct SharedSegmenter {
    inner: Arc<Shared>,
}

impl Default for SharedSegmenter {
    fn default() -> Self {
        Self::new(Segmenter::new())
    }
}

impl SharedSegmenter {
    pub fn new(segmenter: Segmenter) -> Self {
        Self {
            inner: Arc::new(Shared {
                segmenter: Mutex::new(segmenter),
                wake: Notify::new(),
            }),
        }
    }

    /// Push a chunk, waking the consumer if a sentence was completed
    pub fn push(&self, chunk: &str) -> Result<()> {
        self.update(|segmenter| segmenter.push(chunk))
    }

    pub fn push_bytes(&self, chunk: &[u8]) -> Result<()> {
        self.update(|segmenter| segmenter.push_bytes(chunk))
    }

    /// Queue the unfinished tail now, keeping the stream open
    pub fn flush(&self) {
        let produced = {
            let mut segmenter = self.inner.lock();
            let before = segmenter.stats().sentences;
            segmenter.flush();
            segmenter.stats().sentences > before
        };
        if produced {
            self.inner.wake.notify_one();
        }
    }

    /// Close the stream; the consumer ends once the queue is empty
    pub fn close(&self) {
        self.inner.lock().close();
        self.inner.wake.notify_one();
    }

    /// Pop a queued sentence without waiting
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<String> {
        self.inner.lock().next()
    }

    /// Take every sentence queued right now
    pub fn drain_now(&self) -> Vec<String> {
        self.inner.lock().drain().collect()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().is_closed()
    }

    pub fn stats(&self) -> SegmenterStats {
        self.inner.lock().stats()
    }

    /// Stream of sentences, suspending while none are queued
    ///
    /// Ends after [`close`](Self::close) once every sentence was yielded.
    /// Dropping the stream early leaves the segmenter usable.
    pub fn sentences(&self) -> impl Stream<Item = String> + Send + 'static {
        unfold(self.inner.clone(), |shared| async move {
            loop {
                let popped = {
                    let mut segmenter = shared.lock();
                    match segmenter.next() {
                        None if segmenter.is_closed() => return None,
                        popped => popped,
                    }
                };
                if let Some(sentence) = popped {
                    return Some((sentence, shared));
                }
                shared.wake.notified().await;
            }
        })
    }

    fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Segmenter) -> Result<()>,
    {
        let produced = {
            let mut segmenter = self.inner.lock();
            let before = segmenter.stats().sentences;
            f(&mut *segmenter)?;
            segmenter.stats().sentences > before
        };
        if produced {
            self.inner.wake.notify_one();
        }
        Ok(())
    }
}

/// Segment an upstream stream of text chunks
///
/// The segmenter is closed when `input` ends, so the unfinished tail is
/// yielded last.
pub fn sentence_stream<S>(input: S, segmenter: Segmenter) -> impl Stream<Item = String>
where
    S: Stream + Unpin,
    S::Item: AsRef<str>,
{
    unfold(
        (Some(input), segmenter),
        |(mut input, mut segmenter)| async move {
            loop {
                if let Some(sentence) = segmenter.next() {
                    return Some((sentence, (input, segmenter)));
                }
                let upstream = input.as_mut()?;
                match upstream.next().await {
                    Some(chunk) => {
                        if let Err(e) = segmenter.push(chunk.as_ref()) {
                            warn!("dropping chunk: {e}");
                        }
                    }
                    None => {
                        segmenter.close();
                        input = None;
                    }
                }
            }
        },
    )
}
