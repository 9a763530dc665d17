pub mod types;
pub mod classifier;
pub mod outline;
pub mod renderer;
pub mod page;
pub mod external;
pub mod publish;

pub use page::render_document;
pub use external::{ExternalRenderError, ExternalRenderer, MarkmapRenderer};
pub use publish::{publish_builtin, publish_external};
