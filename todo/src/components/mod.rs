//! UI Components
//!
//! Presentational leaves; state changes go up through callbacks.

mod todo_banner;
mod todo_creator;
mod todo_row;
mod todo_table;
mod visibility_control;

pub use todo_banner::TodoBanner;
pub use todo_creator::TodoCreator;
pub use todo_row::TodoRow;
pub use todo_table::TodoTable;
pub use visibility_control::VisibilityControl;
