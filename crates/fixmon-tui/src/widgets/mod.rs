//! Widget library for the fixture window

pub mod alert;
pub mod control_panel;
pub mod header;
pub mod light_board;
pub mod log_view;
pub mod terminal_bar;

pub use alert::AlertDialog;
pub use control_panel::ControlPanel;
pub use header::Header;
pub use light_board::LightBoardView;
pub use log_view::LogView;
pub use terminal_bar::TerminalBar;
