#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColsError {
    #[error("cannot read directory: {path}")]
    NotReadable { path: PathBuf },

    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    #[error("already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("not a regular file: {path}")]
    NotRegularFile { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ColsError>;
