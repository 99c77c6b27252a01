// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{
    can_open, column_geometries, column_width, next_column_start, visible_row_window,
    ColumnGeometry, LayoutAreas, LayoutManager, LayoutMode, MIN_COLUMN_WIDTH, MIN_HEIGHT,
    MIN_WIDTH, VISIBLE_LIST_COLUMNS,
};

// Re-export components
pub use components::{
    BottomBar, BottomBarContent, BrowserFrame, ColumnView, PreviewPane, TopBar, WarningScreen,
};

pub use theme::Theme;
