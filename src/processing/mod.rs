pub mod downsampling;
pub mod gaussian;
pub mod pipeline;
pub mod profile;
pub mod roughness;
pub mod statistics;
pub mod waveform;
