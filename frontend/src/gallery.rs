pub mod api;
pub mod components;
pub mod debounce;
pub mod filter;
pub mod normalize;
pub mod page_range;
pub mod state;
