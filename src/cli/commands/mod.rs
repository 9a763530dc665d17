mod serve;
mod render;

pub use serve::{handle_serve_command, ServeOverrides};
pub use render::handle_render_command;
