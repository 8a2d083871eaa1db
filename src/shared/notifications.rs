//! Benachrichtigungen für den Nutzer (Info, Erfolg, Fehler).
//!
//! Höchstens `max_visible` Einträge gleichzeitig; der älteste fällt heraus.
//! Gleiche sichtbare Meldungen werden zusammengefasst statt gestapelt.

use std::collections::VecDeque;
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Schweregrad einer Benachrichtigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
}

/// Begrenzte Liste sichtbarer Benachrichtigungen.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    entries: VecDeque<Notification>,
    next_id: u64,
    max_visible: usize,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(max_visible: usize, ttl: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
            max_visible: max_visible.max(1),
            ttl,
        }
    }

    /// Fügt eine Meldung hinzu und gibt ihre ID zurück.
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>, now: Instant) -> u64 {
        let message = message.into();
        if let Some(pos) = self
            .entries
            .iter()
            .position(|n| n.level == level && n.message == message)
        {
            if let Some(mut existing) = self.entries.remove(pos) {
                existing.created_at = now;
                let id = existing.id;
                self.entries.push_back(existing);
                return id;
            }
        }

        let id = self.next_id;
        self.next_id += 1;
        match level {
            NotificationLevel::Error => log::warn!("Benachrichtigung: {}", message),
            _ => log::info!("Benachrichtigung: {}", message),
        }
        self.entries.push_back(Notification {
            id,
            level,
            message,
            created_at: now,
        });
        while self.entries.len() > self.max_visible {
            self.entries.pop_front();
        }
        id
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(NotificationLevel::Info, message, now)
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(NotificationLevel::Success, message, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.push(NotificationLevel::Error, message, now)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    /// Entfernt abgelaufene Einträge.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|n| now.saturating_duration_since(n.created_at) < ttl);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frühester Ablaufzeitpunkt (für Repaint-Planung).
    pub fn next_expiry(&self) -> Option<Instant> {
        self.entries.iter().map(|n| n.created_at + self.ttl).min()
    }
}

/// Leitet Panic-Meldungen aller Threads in einen Kanal um.
///
/// Der vorherige Hook wird weiter aufgerufen (Ausgabe auf stderr bleibt).
pub fn install_panic_hook() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel::<String>();
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Unbekannter Fehler".to_string());
        let location = info
            .location()
            .map(|l| format!(" ({}:{})", l.file(), l.line()))
            .unwrap_or_default();
        let _ = tx.send(format!("Interner Fehler: {payload}{location}"));
        previous(info);
    }));
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_is_evicted_beyond_capacity() {
        let now = Instant::now();
        let mut center = NotificationCenter::new(3, Duration::from_secs(6));
        for i in 0..5 {
            center.error(format!("Fehler {i}"), now);
        }
        let messages: Vec<_> = center.visible().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["Fehler 2", "Fehler 3", "Fehler 4"]);
    }

    #[test]
    fn test_duplicates_are_merged_and_refreshed() {
        let t0 = Instant::now();
        let mut center = NotificationCenter::new(3, Duration::from_secs(6));
        let a = center.error("Speichern fehlgeschlagen", t0);
        center.info("Hinweis", t0);
        let b = center.error("Speichern fehlgeschlagen", t0 + Duration::from_secs(4));
        assert_eq!(a, b);
        assert_eq!(center.len(), 2);
        assert_eq!(
            center.visible().last().map(|n| n.message.as_str()),
            Some("Speichern fehlgeschlagen")
        );

        center.prune(t0 + Duration::from_secs(7));
        assert_eq!(center.len(), 1, "Nur die aufgefrischte Meldung bleibt");
    }

    #[test]
    fn test_dismiss_removes_entry() {
        let now = Instant::now();
        let mut center = NotificationCenter::new(3, Duration::from_secs(6));
        let id = center.success("Gespeichert", now);
        center.dismiss(id);
        assert!(center.is_empty());
    }
}
