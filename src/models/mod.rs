pub mod column_stack;
pub mod dir_snapshot;
pub mod operation;

pub use column_stack::ColumnStack;
pub use dir_snapshot::{DirectorySnapshot, MoveDirection};
pub use operation::{ConfirmKind, PendingOperation, TextInputKind};
