//! Abbrechbarer Trailing-Edge-Debouncer mit Flush.
//!
//! Kein eigener Timer-Thread: der Besitzer ruft `poll(now)` pro Frame auf.
//! Dadurch gibt es pro Instanz höchstens einen ausstehenden Wert.

use std::time::{Duration, Instant};

/// Hält den zuletzt geplanten Wert, bis `delay` ohne neue Planung verstrichen ist.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Plant `value`; ein bereits ausstehender Wert wird ersetzt und die Frist neu gestartet.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Verwirft den ausstehenden Wert.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Liefert den Wert, sobald seine Frist erreicht ist.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.cancel(),
            _ => None,
        }
    }

    /// Liefert den ausstehenden Wert sofort (Teardown).
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Zeitpunkt, zu dem der ausstehende Wert fällig wird.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(800));
        d.schedule("a", t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(799)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(800)), Some("a"));
        assert!(!d.is_pending());
        assert_eq!(d.poll(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_reschedule_resets_deadline_and_keeps_last_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(1000));
        d.schedule(1, t0);
        d.schedule(2, t0 + Duration::from_millis(600));
        assert_eq!(d.poll(t0 + Duration::from_millis(1200)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(1600)), Some(2));
    }

    #[test]
    fn test_flush_and_cancel() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(1000));
        d.schedule("x", t0);
        assert_eq!(d.flush(), Some("x"));
        assert_eq!(d.flush(), None);

        d.schedule("y", t0);
        assert_eq!(d.cancel(), Some("y"));
        assert_eq!(d.poll(t0 + Duration::from_secs(2)), None);
    }
}
