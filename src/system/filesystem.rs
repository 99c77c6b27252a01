#![allow(dead_code)]

use crate::utils::error::{ColsError, Result};
use crate::utils::formatter::FileKind;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// 복사 버퍼 크기 (4 KiB)
const COPY_CHUNK_SIZE: usize = 4096;

/// 텍스트 미리보기를 지원하는 확장자
const PREVIEW_EXTENSIONS: &[&str] = &["txt", "py", "c", "java"];

/// 선택 항목의 stat 요약 (하단 바 표시용)
#[derive(Debug, Clone, Copy)]
pub struct EntryStat {
    pub kind: FileKind,
    /// Unix 권한 비트 (읽을 수 없으면 None)
    pub mode: Option<u32>,
    pub modified: SystemTime,
}

/// 파일 시스템 모듈
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 디렉토리의 엔트리 이름 목록 읽기
    ///
    /// `.`/`..`는 제외하고 (숨김 파일은 포함) 바이트 단위 오름차순으로
    /// 정렬해서 반환합니다. 읽을 수 없으면 `NotReadable`.
    pub fn list_names(&self, path: &Path) -> Result<Vec<String>> {
        let read_dir = fs::read_dir(path).map_err(|_| ColsError::NotReadable {
            path: path.to_path_buf(),
        })?;

        let mut names = Vec::new();
        for entry in read_dir {
            // 에러 발생 시 해당 엔트리는 스킵
            let Ok(entry) = entry else { continue };
            names.push(entry.file_name().to_string_lossy().to_string());
        }

        names.sort_unstable();
        Ok(names)
    }

    /// 디렉토리 내 가장 긴 엔트리 이름의 길이
    ///
    /// 새 컬럼을 열기 전 폭 검사에 사용. 읽기 실패 시 0.
    pub fn longest_name_len(&self, path: &Path) -> usize {
        self.list_names(path)
            .map(|names| names.iter().map(|n| n.chars().count()).max().unwrap_or(0))
            .unwrap_or(0)
    }

    /// 디렉토리 여부 확인
    #[allow(clippy::unused_self)]
    pub fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// 경로 존재 확인
    #[allow(clippy::unused_self)]
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// 선택 항목의 stat 요약 반환
    #[allow(clippy::unused_self)]
    pub fn stat(&self, path: &Path) -> Result<EntryStat> {
        let metadata = fs::symlink_metadata(path).map_err(|_| ColsError::NotFound {
            path: path.to_path_buf(),
        })?;

        let kind = if metadata.is_dir() {
            FileKind::Directory
        } else if metadata.is_symlink() {
            FileKind::Symlink
        } else if metadata.is_file() {
            FileKind::Regular
        } else {
            FileKind::Other
        };

        let mode;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            mode = Some(metadata.permissions().mode() & 0o777);
        }
        #[cfg(not(unix))]
        {
            mode = None;
        }

        let modified = metadata
            .modified()
            .unwrap_or_else(|_| SystemTime::now());

        Ok(EntryStat {
            kind,
            mode,
            modified,
        })
    }

    /// 빈 파일 생성
    ///
    /// 이미 존재하면 `AlreadyExists`.
    #[allow(clippy::unused_self)]
    pub fn create_file(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(ColsError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        File::create(path)?;
        Ok(())
    }

    /// 일반 파일 삭제
    ///
    /// 디렉토리 등 일반 파일이 아닌 대상은 `NotRegularFile`로 거부합니다.
    #[allow(clippy::unused_self)]
    pub fn delete_file(&self, path: &Path) -> Result<()> {
        let metadata = fs::symlink_metadata(path).map_err(|_| ColsError::NotFound {
            path: path.to_path_buf(),
        })?;

        if !metadata.is_file() {
            return Err(ColsError::NotRegularFile {
                path: path.to_path_buf(),
            });
        }

        fs::remove_file(path)?;
        Ok(())
    }

    /// 이름 변경
    ///
    /// 원본이 없으면 `NotFound`, 새 이름이 이미 있으면 `AlreadyExists`.
    #[allow(clippy::unused_self)]
    pub fn rename(&self, old: &Path, new: &Path) -> Result<()> {
        if !old.exists() {
            return Err(ColsError::NotFound {
                path: old.to_path_buf(),
            });
        }
        if new.exists() {
            return Err(ColsError::AlreadyExists {
                path: new.to_path_buf(),
            });
        }

        fs::rename(old, new)?;
        Ok(())
    }

    /// 파일을 4 KiB 단위로 버퍼 복사
    ///
    /// 대상이 이미 있으면 `AlreadyExists`. 반환값: 복사된 바이트 수.
    #[allow(clippy::unused_self)]
    pub fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64> {
        if !src.exists() {
            return Err(ColsError::NotFound {
                path: src.to_path_buf(),
            });
        }
        if dest.exists() {
            return Err(ColsError::AlreadyExists {
                path: dest.to_path_buf(),
            });
        }

        let mut reader = File::open(src)?;
        let mut writer = File::create(dest)?;
        let mut buffer = [0u8; COPY_CHUNK_SIZE];
        let mut total = 0u64;

        loop {
            let read = reader.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            writer.write_all(&buffer[..read])?;
            total += read as u64;
        }

        writer.flush()?;
        Ok(total)
    }

    /// 텍스트 미리보기 지원 여부 (일반 파일 + 인식되는 확장자)
    #[allow(clippy::unused_self)]
    pub fn is_previewable(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| PREVIEW_EXTENSIONS.contains(&ext))
            .unwrap_or(false)
    }

    /// 미리보기용 텍스트 라인 읽기 (최대 `max_lines`줄)
    ///
    /// 라인 단위로 읽다가 EOF 또는 줄 수 제한에서 멈춥니다.
    /// 읽기 실패는 빈 미리보기로 처리합니다.
    #[allow(clippy::unused_self)]
    pub fn read_preview_lines(&self, path: &Path, max_lines: usize) -> Vec<String> {
        let Ok(file) = File::open(path) else {
            return Vec::new();
        };

        BufReader::new(file)
            .lines()
            .map_while(|line| line.ok())
            .take(max_lines)
            .collect()
    }
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}
