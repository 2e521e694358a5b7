//! Single-flight latch with one pending slot.
//!
//! While a job is in flight, new requests overwrite the pending slot, so only
//! the most recent one survives. Completing the in-flight job hands back the
//! pending request (if any) which the caller must start right away.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderLatch<T> {
    #[default]
    Idle,
    InFlight {
        pending: Option<T>,
    },
}

impl<T> RenderLatch<T> {
    pub fn new() -> Self {
        RenderLatch::Idle
    }

    /// Returns the target back when it should start now. Otherwise it was
    /// parked in the pending slot, replacing whatever was there.
    pub fn request(&mut self, target: T) -> Option<T> {
        match self {
            RenderLatch::Idle => {
                *self = RenderLatch::InFlight { pending: None };
                Some(target)
            }
            RenderLatch::InFlight { pending } => {
                *pending = Some(target);
                None
            }
        }
    }

    /// Mark the in-flight job done. A pending target is returned and stays in
    /// flight; without one the latch goes idle.
    pub fn complete(&mut self) -> Option<T> {
        match std::mem::take(self) {
            RenderLatch::InFlight {
                pending: Some(next),
            } => {
                *self = RenderLatch::InFlight { pending: None };
                Some(next)
            }
            RenderLatch::InFlight { pending: None } | RenderLatch::Idle => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, RenderLatch::InFlight { .. })
    }

    pub fn pending(&self) -> Option<&T> {
        match self {
            RenderLatch::InFlight { pending } => pending.as_ref(),
            RenderLatch::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenderLatch;

    #[test]
    fn idle_request_starts_immediately() {
        let mut latch = RenderLatch::new();
        assert_eq!(latch.request(3), Some(3));
        assert!(latch.is_in_flight());
        assert_eq!(latch.pending(), None);
    }

    #[test]
    fn requests_while_in_flight_keep_only_the_latest() {
        let mut latch = RenderLatch::new();
        latch.request(1);
        for page in 2..=9 {
            assert_eq!(latch.request(page), None);
        }
        assert_eq!(latch.pending(), Some(&9));

        assert_eq!(latch.complete(), Some(9));
        assert!(latch.is_in_flight());
        assert_eq!(latch.complete(), None);
        assert_eq!(latch, RenderLatch::Idle);
    }

    #[test]
    fn completing_while_idle_is_harmless() {
        let mut latch: RenderLatch<usize> = RenderLatch::new();
        assert_eq!(latch.complete(), None);
        assert!(!latch.is_in_flight());
    }
}
