pub mod ansi;
pub mod components;
pub mod display;
pub mod terminal;
pub mod theme;
pub mod view_models;

pub use display::render;
pub use terminal::{AnsiTerminal, Backend, Frame, display};
pub use theme::{Rgb, Theme};
pub use view_models::{DisplayCell, RenderedBoard, RenderedRow, SquareShade};
