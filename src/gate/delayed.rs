use std::time::Duration;

use super::DelayGate;

/// An inner unit held back behind a [`DelayGate`].
#[derive(Debug)]
pub struct Delayed<T> {
    gate: DelayGate,
    inner: T,
}

/// Wrap `inner` so it is only reachable after `duration` has elapsed.
pub fn with_delay<T>(duration: Duration, inner: T) -> Delayed<T> {
    Delayed::new(DelayGate::new(duration), inner)
}

impl<T> Delayed<T> {
    pub fn new(gate: DelayGate, inner: T) -> Self {
        Self { gate, inner }
    }

    pub fn gate(&self) -> &DelayGate {
        &self.gate
    }

    /// The inner unit, or `None` while the gate has not elapsed.
    pub fn get(&self) -> Option<&T> {
        self.gate.is_elapsed().then_some(&self.inner)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.gate.is_elapsed() {
            Some(&mut self.inner)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn flush() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn inner_hidden_until_elapsed() {
        let mut delayed = with_delay(Duration::from_millis(100), 42);
        assert_eq!(delayed.get(), None);
        assert!(delayed.get_mut().is_none());

        tokio::time::advance(Duration::from_millis(100)).await;
        flush().await;

        assert_eq!(delayed.get(), Some(&42));
        if let Some(value) = delayed.get_mut() {
            *value += 1;
        }
        assert_eq!(delayed.get(), Some(&43));
    }

    #[tokio::test(start_paused = true)]
    async fn disposed_gate_never_reveals_inner() {
        let delayed = with_delay(Duration::from_millis(100), "inner");
        delayed.gate().dispose();
        tokio::time::advance(Duration::from_secs(10)).await;
        flush().await;
        assert_eq!(delayed.get(), None);
    }
}
