pub mod block;
pub mod menu_bar;
pub mod panel;

pub use block::MenuBlock;
pub use menu_bar::MegaMenuBar;
pub use panel::MenuPanel;
