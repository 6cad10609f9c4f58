//! Arena 用户界面
//!
//! 基于egui的只读叠加层：比分面板和相机操作说明。

pub mod overlay;
pub mod state;

pub use overlay::show_overlay;
pub use state::{OverlayState, LEGEND_KEY};
