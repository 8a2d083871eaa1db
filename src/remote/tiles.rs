//! Kachel-Download und -Dekodierung im Hintergrund.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::http::Waker;
use crate::core::MapProvider;

/// Eindeutige Kachel (Anbieter, Zoom, x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub provider: MapProvider,
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileKey {
    pub fn url(&self) -> String {
        self.provider.tile_url(self.x, self.y, self.z)
    }
}

/// Dekodierte Kachel als RGBA-Pixel.
pub struct DecodedTile {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

/// Lädt Kacheln parallel und liefert sie über einen Kanal zurück.
pub struct TileLoader {
    handle: tokio::runtime::Handle,
    http: reqwest::Client,
    tx: mpsc::UnboundedSender<(TileKey, Result<DecodedTile, String>)>,
    rx: mpsc::UnboundedReceiver<(TileKey, Result<DecodedTile, String>)>,
    waker: Option<Waker>,
}

impl TileLoader {
    pub fn new(handle: tokio::runtime::Handle, http: reqwest::Client, waker: Option<Waker>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            http,
            tx,
            rx,
            waker,
        }
    }

    pub fn request(&self, key: TileKey) {
        let http = self.http.clone();
        let tx = self.tx.clone();
        let waker = self.waker.clone();
        self.handle.spawn(async move {
            let result = fetch_tile(&http, &key).await;
            if let Err(e) = &result {
                log::debug!("Kachel {:?} nicht geladen: {}", key, e);
            }
            if tx.send((key, result)).is_ok() {
                if let Some(waker) = waker.as_ref().map(Arc::clone) {
                    waker();
                }
            }
        });
    }

    pub fn drain(&mut self) -> Vec<(TileKey, Result<DecodedTile, String>)> {
        let mut done = Vec::new();
        while let Ok(item) = self.rx.try_recv() {
            done.push(item);
        }
        done
    }
}

async fn fetch_tile(http: &reqwest::Client, key: &TileKey) -> Result<DecodedTile, String> {
    let response = http
        .get(key.url())
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    tokio::task::spawn_blocking(move || decode_tile(&bytes))
        .await
        .map_err(|e| e.to_string())?
}

/// Dekodiert PNG/JPEG in RGBA.
pub fn decode_tile(bytes: &[u8]) -> Result<DecodedTile, String> {
    let image = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let rgba = image.to_rgba8();
    Ok(DecodedTile {
        size: [rgba.width() as usize, rgba.height() as usize],
        rgba: rgba.into_raw(),
    })
}
