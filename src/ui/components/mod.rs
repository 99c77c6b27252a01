pub mod bottom_bar;
pub mod column_view;
pub mod frame;
pub mod preview;
pub mod top_bar;
pub mod warning;

pub use bottom_bar::{BottomBar, BottomBarContent};
pub use column_view::ColumnView;
pub use frame::BrowserFrame;
pub use preview::PreviewPane;
pub use top_bar::TopBar;
pub use warning::WarningScreen;
