//! Streaming segmenter
//!
//! Owns the text of the sentence in progress and turns pushed chunks into
//! finished sentences as soon as each one can be confirmed. The scan cursor
//! and nesting stack survive between pushes, so every char is examined once
//! unless a decision was deferred on it.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    classifier::{Classifier, NestingStack, NestingStep, Verdict},
    error::{Result, SegmentError},
    language::{self, LanguageRules},
};

/// Counters over the lifetime of a segmenter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmenterStats {
    /// Chunks accepted by `push`
    pub chunks: usize,
    /// Bytes accepted by `push`
    pub bytes: usize,
    /// Sentences queued, including the flushed tail
    pub sentences: usize,
}

/// Incremental sentence segmenter for one text stream
#[derive(Debug)]
pub struct Segmenter {
    classifier: Classifier,
    /// Text of the unfinished sentence; always starts at a sentence start
    buffer: String,
    /// First unexamined byte of `buffer`
    scan_cursor: usize,
    /// Start of the whitespace-delimited token holding `scan_cursor`
    token_start: usize,
    stack: NestingStack,
    queue: VecDeque<String>,
    closed: bool,
    /// Stream offset of `buffer[0]`
    finalized: usize,
    stats: SegmenterStats,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Segmenter with the default English rules
    pub fn new() -> Self {
        Self::with_classifier(Classifier::new(language::default_rules()))
    }

    pub fn with_rules(rules: Arc<dyn LanguageRules>) -> Self {
        Self::with_classifier(Classifier::new(rules))
    }

    /// Segmenter for an embedded language (`en`, `ja`, ...)
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::with_classifier(Classifier::for_language(code)?))
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        Self {
            classifier,
            buffer: String::new(),
            scan_cursor: 0,
            token_start: 0,
            stack: NestingStack::new(),
            queue: VecDeque::new(),
            closed: false,
            finalized: 0,
            stats: SegmenterStats::default(),
        }
    }

    /// Append a chunk and queue every sentence it completes
    ///
    /// Fails with [`SegmentError::Closed`] after [`close`](Self::close);
    /// the segmenter is unchanged in that case.
    pub fn push(&mut self, chunk: &str) -> Result<()> {
        if self.closed {
            return Err(SegmentError::Closed);
        }
        self.feed(chunk);
        Ok(())
    }

    /// Append a UTF-8 encoded chunk
    ///
    /// The whole chunk is validated before anything is appended.
    pub fn push_bytes(&mut self, chunk: &[u8]) -> Result<()> {
        if self.closed {
            return Err(SegmentError::Closed);
        }
        let text = std::str::from_utf8(chunk).map_err(|e| SegmentError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        self.feed(text);
        Ok(())
    }

    /// Push several chunks in order
    pub fn push_all<I, S>(&mut self, chunks: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for chunk in chunks {
            self.push(chunk.as_ref())?;
        }
        Ok(())
    }

    /// End the stream
    ///
    /// Pending text is decided with no lookahead and whatever remains is
    /// queued as a final sentence, even without terminal punctuation.
    /// Unclosed brackets or quotes are dropped. Calling `close` again does
    /// nothing.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.scan();
        self.finalize_tail();
        debug!(
            sentences = self.stats.sentences,
            bytes = self.stats.bytes,
            "segmenter closed"
        );
    }

    /// Queue the unfinished tail as a sentence now, keeping the stream open
    pub fn flush(&mut self) {
        if self.closed {
            return;
        }
        self.finalize_tail();
    }

    /// Pop the oldest queued sentence
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Iterate over the sentences queued right now
    ///
    /// Never waits for input and never touches the unfinished tail.
    /// Sentences not consumed before the iterator is dropped stay queued.
    pub fn drain(&mut self) -> Drain<'_> {
        let remaining = self.queue.len();
        Drain {
            queue: &mut self.queue,
            remaining,
        }
    }

    /// Text received but not yet part of a finished sentence
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Number of sentences waiting to be consumed
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Closed and fully consumed
    pub fn is_exhausted(&self) -> bool {
        self.closed && self.queue.is_empty()
    }

    pub fn stats(&self) -> SegmenterStats {
        self.stats
    }

    /// Bytes of the stream already turned into sentences
    pub fn finalized_bytes(&self) -> usize {
        self.finalized
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub(crate) fn feed(&mut self, chunk: &str) {
        self.stats.chunks += 1;
        self.stats.bytes += chunk.len();
        if chunk.is_empty() {
            return;
        }
        self.buffer.push_str(chunk);
        self.scan();
    }

    fn scan(&mut self) {
        while let Some(ch) = self.buffer[self.scan_cursor..].chars().next() {
            let step = self.classifier.track_enclosure(
                &self.buffer,
                self.scan_cursor,
                &mut self.stack,
                self.closed,
            );
            if step == NestingStep::Defer {
                trace!(at = self.finalized + self.scan_cursor, "enclosure deferred");
                return;
            }

            if self.classifier.is_candidate(ch) {
                match self.classifier.classify_in_token(
                    &self.buffer,
                    self.token_start,
                    self.scan_cursor,
                    &self.stack,
                    self.closed,
                ) {
                    Verdict::Confirm { end } => {
                        self.confirm(end);
                        continue;
                    }
                    Verdict::Reject => {}
                    Verdict::Defer => {
                        trace!(at = self.finalized + self.scan_cursor, "boundary deferred");
                        return;
                    }
                }
            }

            self.scan_cursor += ch.len_utf8();
            if ch.is_whitespace() {
                self.token_start = self.scan_cursor;
            }
        }
    }

    fn confirm(&mut self, end: usize) {
        let sentence = normalize_whitespace(&self.buffer[..end]);
        self.buffer.drain(..end);
        self.finalized += end;
        self.reset_scan();
        self.enqueue(sentence);
    }

    fn finalize_tail(&mut self) {
        let tail = normalize_whitespace(&self.buffer);
        self.finalized += self.buffer.len();
        self.buffer.clear();
        self.reset_scan();
        self.enqueue(tail);
    }

    fn reset_scan(&mut self) {
        self.scan_cursor = 0;
        self.token_start = 0;
        self.stack.clear();
    }

    fn enqueue(&mut self, sentence: String) {
        if sentence.is_empty() {
            return;
        }
        debug!(
            index = self.stats.sentences,
            len = sentence.len(),
            "sentence confirmed"
        );
        self.stats.sentences += 1;
        self.queue.push_back(sentence);
    }
}

/// Lazy iterator returned by [`Segmenter::drain`]
#[derive(Debug)]
pub struct Drain<'a> {
    queue: &'a mut VecDeque<String>,
    remaining: usize,
}

impl Iterator for Drain<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Drain<'_> {}

/// Trim and collapse every whitespace run to one space
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
