pub mod debounce;
pub mod error;
pub mod helpers;
pub mod html;
