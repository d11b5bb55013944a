pub mod style;
pub mod surface;
pub mod terminal;

pub use surface::{MemorySurface, Surface, SurfaceEvent};
pub use terminal::TerminalSurface;
