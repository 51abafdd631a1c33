pub mod controls_panel;
pub mod profile_plot;
pub mod stats_panel;
