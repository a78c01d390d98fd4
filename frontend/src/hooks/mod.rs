pub mod use_auto_show;
pub mod use_prize_catalog;
pub mod use_viewport_width;

pub use use_auto_show::*;
pub use use_prize_catalog::*;
pub use use_viewport_width::*;
