pub mod export;
pub mod session_registry;

pub use export::{ExportFormat, PaletteExporter};
pub use session_registry::{InMemorySessionStore, SessionAction, SessionStore};
