//! Main application UI

use std::sync::Arc;
use std::time::Duration;

use egui::{CentralPanel, Context, TopBottomPanel};
use tokio::runtime::Handle;
use tracing::{debug, error, info};

use super::dialogs::{self, DialogOutcome, DialogState};
use super::panels;
use super::theme::{Icons, Theme};
use crate::core::{CreateInstanceRequest, InstanceManager, Settings, Waker};
use crate::persistence::SettingsStore;

/// Main application struct
pub struct MarinaApp {
    /// Controller owning the display pane
    manager: InstanceManager,
    /// Settings currently in effect
    settings: Settings,
    /// Where edited settings are saved
    store: SettingsStore,
    /// Open dialog, if any
    dialog: DialogState,
    /// Initial load waits for the first frame
    first_frame: bool,
}

impl MarinaApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        store: SettingsStore,
        runtime: Handle,
    ) -> Self {
        Theme::apply(&cc.egui_ctx, settings.theme);

        let ctx = cc.egui_ctx.clone();
        let waker: Waker = Arc::new(move || ctx.request_repaint());
        let manager = InstanceManager::new(&settings, runtime, Some(waker));

        Self {
            manager,
            settings,
            store,
            dialog: DialogState::None,
            first_frame: true,
        }
    }

    fn open_create_dialog(&mut self) {
        // Checked first so no prompt task is started for a refused form
        if self.dialog.is_open() {
            return;
        }
        self.dialog.open(DialogState::NewInstance {
            form: CreateInstanceRequest::default(),
            reply: self.manager.begin_create(),
        });
    }

    fn apply_settings(&mut self, ctx: &Context, mut draft: Settings) {
        draft.validate();
        if let Err(e) = self.store.save(&draft) {
            error!("Failed to save settings: {:#}", e);
        }

        Theme::apply(ctx, draft.theme);
        self.manager.reconfigure(&draft);
        self.settings = draft;
        self.manager.load_instances();
    }

    /// Render the top bar with actions
    fn render_top_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::none()
                    .fill(Theme::BG_PRIMARY)
                    .stroke(egui::Stroke::new(1.0, Theme::BORDER_LIGHT))
                    .inner_margin(egui::Margin::symmetric(20.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("◈").size(24.0).color(Theme::PRIMARY));
                    ui.label(
                        egui::RichText::new("Marina")
                            .size(22.0)
                            .strong()
                            .color(Theme::TEXT_PRIMARY),
                    );

                    ui.add_space(16.0);

                    ui.vertical(|ui| {
                        let endpoint = self.manager.endpoint().unwrap_or("no API configured");
                        ui.label(egui::RichText::new(endpoint).small().color(Theme::TEXT_MUTED));
                        if let Some(at) = self.manager.last_loaded() {
                            ui.label(
                                egui::RichText::new(format!("Updated {}", at.format("%H:%M:%S")))
                                    .small()
                                    .color(Theme::TEXT_MUTED),
                            );
                        }
                    });

                    // Right-aligned buttons
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let create_btn = egui::Button::new(
                            egui::RichText::new(format!("{} Create", Icons::ADD))
                                .color(egui::Color32::WHITE),
                        )
                        .fill(Theme::PRIMARY)
                        .rounding(egui::Rounding::same(8.0))
                        .min_size(egui::vec2(110.0, 36.0));

                        if ui.add(create_btn).clicked() {
                            self.open_create_dialog();
                        }

                        ui.add_space(8.0);

                        let refresh_btn = egui::Button::new(
                            egui::RichText::new(format!("{} Refresh", Icons::REFRESH))
                                .color(Theme::TEXT_PRIMARY),
                        )
                        .fill(Theme::BG_TERTIARY)
                        .rounding(egui::Rounding::same(8.0))
                        .min_size(egui::vec2(100.0, 36.0));

                        if ui.add(refresh_btn).clicked() {
                            self.manager.load_instances();
                        }

                        ui.add_space(8.0);

                        if ui
                            .button(egui::RichText::new(Icons::SETTINGS).size(16.0))
                            .on_hover_text("Settings")
                            .clicked()
                        {
                            self.dialog.open(DialogState::Settings {
                                draft: self.settings.clone(),
                            });
                        }
                    });
                });
            });
    }

    /// Render the display pane
    fn render_main_content(&mut self, ctx: &Context) {
        let clicked = CentralPanel::default()
            .show(ctx, |ui| panels::instances::render(ui, &self.manager))
            .inner;

        if let Some(click) = clicked {
            if self.dialog.is_open() {
                debug!("Ignoring {:?} on {}: a dialog is open", click.action, click.name);
                return;
            }
            let name = click.name.clone();
            if let Some(reply) = self.manager.handle_click(click) {
                self.dialog.open(DialogState::ConfirmDelete { name, reply });
            }
        }
    }

    /// Render dialogs
    fn render_dialogs(&mut self, ctx: &Context) {
        let outcome = match &mut self.dialog {
            DialogState::None => return,
            DialogState::NewInstance { form, .. } => dialogs::new_instance::render(ctx, form),
            DialogState::ConfirmDelete { name, .. } => dialogs::confirm::render(
                ctx,
                "Delete Instance",
                &format!("Are you sure you want to delete \"{}\"?", name),
            ),
            DialogState::Settings { draft } => dialogs::settings::render(ctx, draft),
        };

        if outcome == DialogOutcome::Open {
            return;
        }

        match (std::mem::take(&mut self.dialog), outcome) {
            (DialogState::NewInstance { form, reply }, DialogOutcome::Submitted) => {
                reply.send(form);
            }
            (DialogState::ConfirmDelete { reply, .. }, DialogOutcome::Submitted) => {
                reply.send(());
            }
            (DialogState::NewInstance { reply, .. }, _) => reply.cancel(),
            (DialogState::ConfirmDelete { reply, .. }, _) => reply.cancel(),
            (DialogState::Settings { draft }, DialogOutcome::Submitted) => {
                self.apply_settings(ctx, draft);
            }
            _ => {}
        }
    }
}

impl eframe::App for MarinaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            self.first_frame = false;
            info!("First frame rendered, loading instances");
            self.manager.load_instances();
        }

        // Pick up whatever background tasks have posted
        self.manager.poll();

        // Spinner animation; task updates also wake the UI directly
        ctx.request_repaint_after(Duration::from_millis(250));

        self.render_top_bar(ctx);
        self.render_main_content(ctx);
        self.render_dialogs(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
    }
}
