use eframe::egui;
use crate::processing::pipeline::{self, SurfaceAnalysis};
use crate::state::app_state::{AppState, VERSION};
use crate::state::settings::RenderRequest;
use crate::ui::controls_panel;
use crate::ui::profile_plot;
use crate::ui::stats_panel::{self, StatsAction};

/// The main RoughPlot application.
pub struct RoughPlotApp {
    pub state: AppState,
    /// Result of the most recent pipeline run, `None` if it failed.
    analysis: Option<SurfaceAnalysis>,
    /// Request the current `analysis` was computed from.
    last_request: Option<RenderRequest>,
    /// Failure from the most recent run, shown above the plot.
    pub error_message: Option<String>,
    /// Whether to show the About window (hidden menu).
    pub show_about: bool,
}

impl RoughPlotApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();

        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(22.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            egui::FontId::monospace(13.5),
        );
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);
        ctx.set_visuals(state.theme.visuals());

        tracing::info!("RoughPlot v{VERSION} started");

        Self {
            state,
            analysis: None,
            last_request: None,
            error_message: None,
            show_about: false,
        }
    }

    /// Re-run the pipeline if the shape or kernel parameters moved since the
    /// last run. A new request simply replaces the previous result.
    fn refresh_analysis(&mut self) {
        let request = self.state.request;
        let stale = self
            .last_request
            .map_or(true, |last| last.needs_recompute(&request));
        self.last_request = Some(request);
        if !stale {
            return;
        }

        match pipeline::analyze(request.wave_parameters(), request.kernel_radius()) {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                self.error_message = None;
            }
            Err(e) => {
                tracing::warn!("Surface analysis failed: {e}");
                self.analysis = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn copy_stats_json(&mut self, ctx: &egui::Context) {
        let Some(analysis) = self.analysis.as_ref() else {
            return;
        };
        match serde_json::to_string_pretty(&analysis.stats) {
            Ok(json) => {
                ctx.copy_text(json);
                tracing::info!("Copied statistics to clipboard");
            }
            Err(e) => {
                tracing::error!("Failed to serialize statistics: {e}");
                self.error_message = Some(format!("Failed to copy statistics: {e}"));
            }
        }
    }
}

impl eframe::App for RoughPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.state.theme.visuals());

        // --- Header panel ---
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let heading_response = ui.heading("RoughPlot");
                heading_response.context_menu(|ui| {
                    if ui.button("About RoughPlot").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                    if ui.button("Reset Parameters").clicked() {
                        self.state.reset_parameters();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.state.theme {
                        crate::state::theme::Theme::Dark => "Light Mode",
                        crate::state::theme::Theme::Light => "Dark Mode",
                    };
                    if ui.button(theme_label).clicked() {
                        self.state.theme = self.state.theme.toggle();
                        tracing::info!("Switched to {} theme", self.state.theme.label());
                    }

                    ui.separator();
                    ui.small(format!("v{VERSION}"));
                });
            });
        });

        // --- Parameter controls ---
        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if controls_panel::show_controls_panel(ui, &mut self.state.request) {
                        tracing::debug!(request = ?self.state.request, "parameters changed");
                    }
                });
            });

        self.refresh_analysis();

        // --- Statistics ---
        let mut stats_action = StatsAction::None;
        egui::TopBottomPanel::bottom("stats")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
                stats_action = stats_panel::show_stats_panel(ui, self.analysis.as_ref());
            });
        if let StatsAction::CopyJson = stats_action {
            self.copy_stats_json(ctx);
        }

        // --- Plot ---
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(msg) = &self.error_message {
                ui.colored_label(egui::Color32::from_rgb(220, 60, 60), msg);
            }
            profile_plot::show_profile_plot(
                ui,
                self.analysis.as_ref(),
                self.state.request.curves,
                &self.state.theme,
            );
        });

        if self.show_about {
            egui::Window::new("About RoughPlot")
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("RoughPlot v{VERSION}"));
                    ui.label("Synthetic surface profiles, Gaussian mean lines and roughness statistics.");
                });
        }
    }
}
