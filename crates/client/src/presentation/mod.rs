pub mod terminal;
pub mod theme;
pub mod ui;
