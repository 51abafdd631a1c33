use egui_plot::{HLine, Legend, Line, Plot, PlotPoints};

use crate::processing::downsampling;
use crate::processing::pipeline::SurfaceAnalysis;
use crate::processing::profile::Profile;
use crate::state::settings::CurveToggles;
use crate::state::theme::Theme;

/// Upper bound on points handed to the plot per curve.
pub const MAX_DISPLAY_POINTS: usize = 4000;

fn curve_points(profile: &Profile) -> PlotPoints {
    PlotPoints::from(downsampling::lttb_curve(
        profile.as_slice(),
        MAX_DISPLAY_POINTS,
    ))
}

/// Draw the enabled curves of `analysis` against sample index.
pub fn show_profile_plot(
    ui: &mut egui::Ui,
    analysis: Option<&SurfaceAnalysis>,
    curves: CurveToggles,
    theme: &Theme,
) {
    Plot::new("profile_plot")
        .legend(Legend::default())
        .x_axis_label("Sample")
        .y_axis_label("Height")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.hline(HLine::new(0.0).color(theme.center_line_color()).width(1.0));

            let Some(analysis) = analysis else {
                return;
            };

            if curves.surface_profile {
                plot_ui.line(
                    Line::new(curve_points(&analysis.profile))
                        .name("Surface profile")
                        .color(theme.profile_color())
                        .width(1.5),
                );
            }
            if curves.mean_line {
                plot_ui.line(
                    Line::new(curve_points(&analysis.mean_line))
                        .name("Mean line")
                        .color(theme.mean_line_color())
                        .width(1.5),
                );
            }
            if curves.roughness {
                plot_ui.line(
                    Line::new(curve_points(&analysis.roughness))
                        .name("Roughness")
                        .color(theme.roughness_color())
                        .width(1.5),
                );
            }
        });
}
