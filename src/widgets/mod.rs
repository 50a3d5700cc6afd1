// Reusable UI widgets

pub mod menu;
pub mod text_input;
pub mod toast;

pub use menu::{Menu, MenuItem, MenuState};
pub use text_input::TextInputWidget;
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
