pub mod use_mega_menu;

pub use use_mega_menu::{use_mega_menu, MegaMenuState};
