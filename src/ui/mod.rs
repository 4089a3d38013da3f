pub mod app;
pub mod board_panel;
pub mod controls_panel;
pub mod player_settings;
pub mod settings;
pub mod settings_io;
