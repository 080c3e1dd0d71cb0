use crate::foundation::clock::Ticker;
use crate::foundation::core::TimeMs;

/// One-shot character-by-character message reveal.
///
/// The visible prefix grows by exactly one character per elapsed delay
/// interval, with no skips or duplicates, and the completion callback fires
/// at most once when the last character appears (at roughly N x delay for a
/// message of N characters). Char-boundary aware, so multi-byte text is
/// safe.
pub struct Typewriter {
    text: String,
    /// Byte offset after each character, in order.
    char_ends: Vec<usize>,
    shown: usize,
    ticker: Ticker,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for Typewriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typewriter")
            .field("text", &self.text)
            .field("shown", &self.shown)
            .finish()
    }
}

impl Typewriter {
    /// Start revealing `text` at `started` with a fixed per-character delay.
    pub fn new(text: impl Into<String>, delay_ms: u64, started: TimeMs) -> Self {
        let text = text.into();
        let char_ends = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            text,
            char_ends,
            shown: 0,
            ticker: Ticker::new(started, delay_ms),
            on_complete: None,
        }
    }

    /// Register the completion callback; invoked at most once. An empty (or
    /// already finished) message completes immediately.
    pub fn set_on_complete(&mut self, mut callback: impl FnMut() + 'static) {
        if self.is_complete() {
            callback();
        } else {
            self.on_complete = Some(Box::new(callback));
        }
    }

    /// Total character count of the message.
    pub fn len_chars(&self) -> usize {
        self.char_ends.len()
    }

    /// True once every character is visible.
    pub fn is_complete(&self) -> bool {
        self.shown == self.char_ends.len()
    }

    /// Advance to `now` and return the currently visible prefix.
    pub fn poll(&mut self, now: TimeMs) -> &str {
        let due = self.ticker.poll(now) as usize;
        if due > 0 && !self.is_complete() {
            self.shown = (self.shown + due).min(self.char_ends.len());
            if self.is_complete()
                && let Some(mut cb) = self.on_complete.take()
            {
                cb();
            }
        }
        self.visible()
    }

    /// The currently visible prefix without advancing time.
    pub fn visible(&self) -> &str {
        match self.shown {
            0 => "",
            n => &self.text[..self.char_ends[n - 1]],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/typewriter.rs"]
mod tests;
