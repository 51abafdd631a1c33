use crate::processing::waveform::WaveType;
use crate::state::settings::RenderRequest;

/// Show the parameter controls. Returns `true` if any value changed this frame.
pub fn show_controls_panel(ui: &mut egui::Ui, request: &mut RenderRequest) -> bool {
    let mut changed = false;

    ui.label(egui::RichText::new("Profile").strong().size(15.0));
    ui.add_space(4.0);

    egui::Grid::new("profile_params")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Wave type");
            egui::ComboBox::from_id_salt("wave_type")
                .selected_text(request.wave_type.label())
                .width(120.0)
                .show_ui(ui, |ui| {
                    for wave in WaveType::ALL {
                        changed |= ui
                            .selectable_value(&mut request.wave_type, wave, wave.label())
                            .changed();
                    }
                });
            ui.end_row();

            ui.label("Wave count");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut request.wave_count)
                        .range(0.01..=1000.0)
                        .speed(0.1),
                )
                .changed();
            ui.end_row();

            ui.label("Amplitude");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut request.amplitude)
                        .range(0.001..=1.0e6)
                        .speed(0.01),
                )
                .changed();
            ui.end_row();

            ui.label("Points");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut request.point_count)
                        .range(1..=200_000)
                        .speed(5.0),
                )
                .changed();
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Mean Line").strong().size(15.0));
    ui.add_space(4.0);

    changed |= ui
        .add(
            egui::Slider::new(&mut request.gauss_fraction, 0.001..=1.0)
                .logarithmic(true)
                .text("Gauss size"),
        )
        .on_hover_text("Kernel radius as a fraction of the point count")
        .changed();
    ui.small(format!(
        "Kernel radius: {}",
        request.kernel_radius().round()
    ));

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Curves").strong().size(15.0));
    ui.add_space(4.0);

    let curves = &mut request.curves;
    changed |= ui.checkbox(&mut curves.surface_profile, "Surface profile").changed();
    changed |= ui.checkbox(&mut curves.mean_line, "Mean line").changed();
    changed |= ui
        .checkbox(&mut curves.roughness, "Roughness from mean")
        .changed();

    changed
}
