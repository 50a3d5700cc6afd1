// Shared chrome drawn around every kiosk view

pub mod footer;
pub mod header;

pub use footer::Footer;
pub use header::Header;
