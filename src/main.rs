//! Travel Map Editor.
//!
//! Desktop-Client für Reisepläne: Karte mit Spots, Zielort und Ortssuche
//! gegen die Reiseplan-REST-API.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use eframe::egui;
use travel_map_editor::remote::{HttpBackend, TileLoader};
use travel_map_editor::shared::notifications::install_panic_hook;
use travel_map_editor::{
    render, ui, AppController, AppIntent, AppState, ClientOptions, NotificationLevel,
    OfflineBackend, ResourceScope,
};

/// Kommandozeilen-Argumente
#[derive(Debug, Parser)]
#[command(version, about = "Karten-Client für Reisepläne")]
struct Args {
    /// ID des Reiseplans
    #[arg(long)]
    plan: Option<String>,
    /// ID des Reiseziels innerhalb des Plans
    #[arg(long)]
    dest: Option<String>,
    /// Basis-URL der REST-API (überschreibt die Optionsdatei)
    #[arg(long)]
    api_base: Option<String>,
    /// Pfad zur Optionsdatei (TOML)
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    AppRunner::run(Args::parse())
}

struct AppRunner;

impl AppRunner {
    fn run(args: Args) -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Travel Map Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let options_path = args.options.unwrap_or_else(ClientOptions::config_path);
        let mut client_options = ClientOptions::load_from_file(&options_path);
        if let Some(api_base) = args.api_base {
            client_options.api_base = api_base;
        }

        let scope = ResourceScope::new(args.plan.unwrap_or_default(), args.dest);

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Travel Map Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Travel Map Editor",
            native_options,
            Box::new(move |cc| Ok(Box::new(EditorApp::new(&cc.egui_ctx, client_options, scope)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::MapRenderer,
    input: ui::InputState,
    sidebar: ui::SidebarState,
    panic_rx: mpsc::Receiver<String>,
}

impl EditorApp {
    fn new(ctx: &egui::Context, options: ClientOptions, scope: ResourceScope) -> Self {
        let repaint_ctx = ctx.clone();
        let waker: travel_map_editor::remote::Waker = Arc::new(move || repaint_ctx.request_repaint());

        let tile_capacity = options.tile_cache_capacity;
        let (controller, loader) = match HttpBackend::new(&options, Some(waker.clone())) {
            Ok(backend) => {
                let loader =
                    TileLoader::new(backend.runtime_handle(), backend.http_client(), Some(waker));
                (AppController::with_backend(Box::new(backend)), Some(loader))
            }
            Err(e) => {
                log::error!("HTTP-Backend nicht verfügbar, arbeite offline: {:#}", e);
                (AppController::with_backend(Box::new(OfflineBackend)), None)
            }
        };

        let mut app = Self {
            state: AppState::with_options(options).with_scope(scope),
            controller,
            renderer: render::MapRenderer::new(loader, tile_capacity),
            input: ui::InputState::new(),
            sidebar: ui::SidebarState::new(),
            panic_rx: install_panic_hook(),
        };
        app.process_events(vec![AppIntent::ReloadRequested]);
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.process_events(vec![AppIntent::ShutdownRequested]);
        }

        let mut events = vec![AppIntent::FrameTick { now: Instant::now() }];
        events.extend(self.collect_system_events());
        self.process_events(events);

        if let Err(e) = self.controller.poll_remote(&mut self.state) {
            log::error!("Remote-Ergebnisse konnten nicht verarbeitet werden: {:#}", e);
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        self.maybe_request_repaint(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.process_events(vec![AppIntent::ShutdownRequested]);
    }
}

impl EditorApp {
    fn collect_system_events(&mut self) -> Vec<AppIntent> {
        self.panic_rx
            .try_iter()
            .map(|message| AppIntent::NotificationReported {
                level: NotificationLevel::Error,
                message,
            })
            .collect()
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_sidebar(ctx, &mut self.sidebar, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.sidebar));
        events.extend(ui::show_add_spot_dialog(ctx, &mut self.state.interaction));
        events.extend(ui::show_edit_spot_dialog(ctx, &mut self.state.interaction));
        events.extend(ui::show_destination_dialog(ctx, &mut self.state.interaction));

        let mut map_rect = egui::Rect::NOTHING;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                map_rect = rect;

                events.extend(
                    self.input
                        .collect_map_events(ui, &response, rect, &self.state),
                );

                let scene = self.controller.build_map_scene(&self.state);
                let painter = ui.painter_at(rect);
                self.renderer.render_scene(ctx, &painter, rect, &scene);

                if !self.state.session.scope.is_valid() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Kein Reiseziel gewählt. Start mit --plan <ID> --dest <ID>",
                        egui::FontId::proportional(18.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events.extend(ui::show_context_menu(ctx, &self.state, map_rect));
        events.extend(ui::show_spot_popup(ctx, &mut self.state, map_rect));
        events.extend(ui::render_map_overlay(ctx, &self.state, map_rect));
        events.extend(ui::render_notifications(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Plant den nächsten Frame zur frühesten Frist (Debouncer, Ablauf von Meldungen).
    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        let now = Instant::now();
        let deadline = [
            self.state.view.viewport_save.deadline(),
            self.state.search.debounce.deadline(),
            self.state.notifications.next_expiry(),
        ]
        .into_iter()
        .flatten()
        .min();

        if let Some(deadline) = deadline {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        if self.state.search.is_loading() || self.state.session.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
