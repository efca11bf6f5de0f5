pub mod client;
pub mod models;
pub mod session;

pub use client::{ProductPlatform, ShopifyClient, ShopifyError};
pub use session::{resolve_session, Session};
