//! HTTP-Backend: eigener Tokio-Runtime, ein Schreib-Task, Ergebnis-Kanal.
//!
//! Alle Aufträge gehen durch genau einen Task und erreichen den Server dadurch
//! in Einreichungsreihenfolge. Schreibaufträge werden dort abgewartet,
//! Leseaufträge nur gestartet und laufen danach parallel. Suchen umgehen die
//! Warteschlange.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

use super::api::ApiClient;
use super::geocode::Geocoder;
use super::{
    ApiError, GeocodeError, RemoteBackend, RemoteEvent, RemoteRequest, Resource, SearchRequest,
};
use crate::core::{Config, GuideImage, Spot};
use crate::shared::ClientOptions;

/// Callback, der den UI-Thread aufweckt (z.B. `egui::Context::request_repaint`).
pub type Waker = Arc<dyn Fn() + Send + Sync>;

enum Job {
    Write(RemoteRequest),
    /// Startet erst nach allen vorher eingereihten Schreibaufträgen
    Read(RemoteRequest),
    Flush(oneshot::Sender<()>),
}

/// Ergebnisse zurück an den UI-Thread schicken und diesen wecken.
#[derive(Clone)]
struct EventSink {
    tx: mpsc::UnboundedSender<RemoteEvent>,
    waker: Option<Waker>,
}

impl EventSink {
    fn send(&self, event: RemoteEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("Ergebnis verworfen: Empfänger beendet");
            return;
        }
        if let Some(waker) = &self.waker {
            waker();
        }
    }
}

/// Produktives Backend gegen die REST-API.
pub struct HttpBackend {
    runtime: Runtime,
    api: ApiClient,
    geocoder: Geocoder,
    http: reqwest::Client,
    sink: EventSink,
    events_rx: mpsc::UnboundedReceiver<RemoteEvent>,
    job_tx: mpsc::UnboundedSender<Job>,
}

impl HttpBackend {
    pub fn new(options: &ClientOptions, waker: Option<Waker>) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("travel-map-io")
            .enable_all()
            .build()?;

        let http = reqwest::Client::builder()
            .user_agent(options.user_agent.clone())
            .timeout(options.request_timeout())
            .build()?;

        let api = ApiClient::new(http.clone(), options.api_base.clone());
        let geocoder = Geocoder::new(
            http.clone(),
            options.api_base.clone(),
            options.nominatim_url.clone(),
        );

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let sink = EventSink {
            tx: events_tx,
            waker,
        };

        let (job_tx, job_rx) = mpsc::unbounded_channel();
        runtime.spawn(job_loop(api.clone(), job_rx, sink.clone()));

        log::info!("HTTP-Backend gestartet (API: {})", options.api_base);

        Ok(Self {
            runtime,
            api,
            geocoder,
            http,
            sink,
            events_rx,
            job_tx,
        })
    }

    /// Handle des Runtimes für weitere Hintergrundarbeit (Kacheln).
    pub fn runtime_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    /// Gemeinsamer HTTP-Client (User-Agent, Timeout).
    pub fn http_client(&self) -> reqwest::Client {
        self.http.clone()
    }

    fn enqueue(&self, job: Job) -> bool {
        self.job_tx.send(job).is_ok()
    }
}

async fn job_loop(api: ApiClient, mut rx: mpsc::UnboundedReceiver<Job>, sink: EventSink) {
    while let Some(job) = rx.recv().await {
        match job {
            Job::Flush(done) => {
                let _ = done.send(());
            }
            Job::Write(request) => {
                if let Some(event) = execute_write(&api, request).await {
                    sink.send(event);
                }
            }
            Job::Read(request) => {
                let api = api.clone();
                let sink = sink.clone();
                tokio::spawn(async move {
                    if let Some(event) = execute_read(&api, request).await {
                        sink.send(event);
                    }
                });
            }
        }
    }
    log::debug!("Auftrags-Task beendet");
}

async fn execute_read(api: &ApiClient, request: RemoteRequest) -> Option<RemoteEvent> {
    let event = match request {
        RemoteRequest::LoadSpots { scope } => {
            RemoteEvent::SpotsLoaded(api.fetch::<Vec<Spot>>(Resource::Spots, &scope).await)
        }
        RemoteRequest::LoadConfig { scope } => {
            RemoteEvent::ConfigLoaded(api.fetch::<Config>(Resource::Config, &scope).await)
        }
        RemoteRequest::LoadGuideImages { scope } => RemoteEvent::GuideImagesLoaded(
            api.fetch::<Vec<GuideImage>>(Resource::GuideImages, &scope)
                .await,
        ),
        RemoteRequest::LoadPlans => RemoteEvent::PlansLoaded(api.list_plans().await),
        RemoteRequest::LoadDestinations { plan_id } => {
            RemoteEvent::DestinationsLoaded(api.list_destinations(&plan_id).await)
        }
        other => {
            log::error!("Schreibauftrag im Lesepfad: {:?}", other);
            return None;
        }
    };
    Some(event)
}

async fn execute_write(api: &ApiClient, request: RemoteRequest) -> Option<RemoteEvent> {
    let (resource, result): (Resource, Result<(), ApiError>) = match request {
        RemoteRequest::SaveSpots { scope, spots } => {
            (Resource::Spots, api.save(Resource::Spots, &scope, &spots).await)
        }
        RemoteRequest::SaveConfig { scope, config } => {
            (Resource::Config, api.save(Resource::Config, &scope, &config).await)
        }
        RemoteRequest::SaveGuideImages { scope, images } => (
            Resource::GuideImages,
            api.save(Resource::GuideImages, &scope, &images).await,
        ),
        RemoteRequest::UploadGuideImage {
            scope,
            file_name,
            bytes,
        } => {
            let result = api.upload_guide_image(&scope, &file_name, bytes).await;
            return Some(RemoteEvent::GuideImageUploaded(result));
        }
        other => {
            log::error!("Leseauftrag im Schreibpfad: {:?}", other);
            return None;
        }
    };
    if let Err(e) = &result {
        log::warn!("Speichern von {} fehlgeschlagen: {}", resource.label(), e);
    }
    Some(RemoteEvent::WriteFinished { resource, result })
}

impl RemoteBackend for HttpBackend {
    fn submit(&self, request: RemoteRequest) {
        let job = if request.is_write() {
            Job::Write(request)
        } else {
            Job::Read(request)
        };
        if !self.enqueue(job) {
            log::error!("Auftrags-Task nicht erreichbar, Auftrag verloren");
        }
    }

    fn search(&self, request: SearchRequest, cancel: CancellationToken) {
        let geocoder = self.geocoder.clone();
        let sink = self.sink.clone();
        self.runtime.spawn(async move {
            let generation = request.generation;
            let result = tokio::select! {
                _ = cancel.cancelled() => Err(GeocodeError::Cancelled),
                result = geocoder.search(&request) => result,
            };
            if matches!(result, Err(GeocodeError::Cancelled)) {
                log::debug!("Suche #{} abgebrochen", generation);
                return;
            }
            sink.send(RemoteEvent::SearchFinished { generation, result });
        });
    }

    fn drain_events(&mut self) -> Vec<RemoteEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn flush(&mut self, timeout: Duration) -> bool {
        let (done_tx, done_rx) = oneshot::channel();
        if !self.enqueue(Job::Flush(done_tx)) {
            return true;
        }
        let drained = self
            .runtime
            .block_on(async { tokio::time::timeout(timeout, done_rx).await.is_ok() });
        if drained {
            log::info!("Ausstehende Schreibvorgänge abgeschlossen");
        } else {
            log::warn!(
                "Ausstehende Schreibvorgänge nach {:?} nicht abgeschlossen",
                timeout
            );
        }
        drained
    }
}
