mod editor;
pub mod history;

pub use editor::{Edit, InputEditor, LineBuffer};
pub use history::History;
