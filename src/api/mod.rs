pub mod admin;
pub mod migrate;
pub mod session;

pub use admin::admin_router;
pub use migrate::{migrate_router, MigrateState};
pub use session::session_router;
