/// One-shot reveal latch.
///
/// The revealed flag transitions false to true exactly once and never back;
/// the completion callback is consumed on the first fire, so it cannot run
/// twice no matter how often the threshold condition is re-satisfied.
#[derive(Default)]
pub struct CompletionLatch {
    revealed: bool,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for CompletionLatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionLatch")
            .field("revealed", &self.revealed)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

impl CompletionLatch {
    /// Unfired latch with no callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the completion callback. Replaces any previous one; has no
    /// effect once the latch has fired.
    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        if !self.revealed {
            self.on_complete = Some(Box::new(callback));
        }
    }

    /// Whether the reveal has latched.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Latch the reveal. Returns true on the first call only; the callback
    /// (if any) is invoked on that call and then dropped.
    pub fn fire(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        tracing::info!("scratch surface revealed");
        if let Some(mut cb) = self.on_complete.take() {
            cb();
        }
        true
    }
}
