pub mod filter_panel;
pub mod page_header;
pub mod progress_bar;
pub mod select;
pub mod stat_card;
