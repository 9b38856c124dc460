pub mod bundle;
pub mod render_context;
pub mod routing;

pub use bundle::Bundle;
pub use render_context::RenderContext;
pub use routing::{DEFAULT_PREFIX, DEFAULT_RESOURCE_PATH, RoutingImport, derive_key, derive_key_with};
