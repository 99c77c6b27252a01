pub mod filesystem;

pub use filesystem::{EntryStat, FileSystem};
