use crate::processing::pipeline::SurfaceAnalysis;

/// Actions the stats panel can request from the parent.
pub enum StatsAction {
    None,
    CopyJson,
}

/// Render the roughness statistics row.
pub fn show_stats_panel(ui: &mut egui::Ui, analysis: Option<&SurfaceAnalysis>) -> StatsAction {
    let mut action = StatsAction::None;

    ui.horizontal(|ui| {
        let Some(analysis) = analysis else {
            ui.label(egui::RichText::new("No statistics for the current parameters.").weak());
            return;
        };
        let stats = &analysis.stats;

        for (label, value) in [("Ra", stats.ra), ("Rq", stats.rq), ("Rmax/Ry", stats.ry)] {
            ui.label(egui::RichText::new(label).strong());
            ui.monospace(format!("{value:.6}"));
            ui.separator();
        }
        ui.label(format!("Kernel radius: {}", analysis.kernel_radius));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("Copy JSON")
                .on_hover_text(stats.report())
                .clicked()
            {
                action = StatsAction::CopyJson;
            }
        });
    });

    action
}
