pub mod get_settings;
pub mod set_intensity;

pub use get_settings::GetSettingsUseCase;
pub use set_intensity::SetIntensityUseCase;
