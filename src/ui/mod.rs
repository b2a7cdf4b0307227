// Terminal UI using Ratatui

pub mod components;
pub mod diff;
pub mod events;
pub mod live;
pub mod scan;
pub mod state;
pub mod target;

pub use diff::DiffScreen;
pub use events::run_ui;
pub use live::LiveScreen;
pub use scan::ScanScreen;
pub use state::AppState;
pub use target::TargetScreen;
