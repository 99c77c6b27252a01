// Formatters - 권한 문자열, 날짜 포맷팅

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// 파일 종류 문자 (ls 첫 글자와 동일)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// 일반 파일
    Regular,
    /// 디렉토리
    Directory,
    /// 심볼릭 링크
    Symlink,
    /// 그 외 (fifo, socket, device 등)
    Other,
}

impl FileKind {
    /// 하단 바 권한 문자열의 첫 글자
    pub fn type_char(self) -> char {
        match self {
            FileKind::Regular => '-',
            FileKind::Directory => 'd',
            FileKind::Symlink => 'l',
            FileKind::Other => '?',
        }
    }
}

/// 파일 종류 + Unix 모드를 10자 고정 문자열로 포맷팅
///
/// 예: 일반 파일 0o644 → "-rw-r--r--"
///
/// # Examples
/// ```
/// use cols::utils::formatter::{format_mode, FileKind};
///
/// assert_eq!(format_mode(FileKind::Regular, Some(0o644)), "-rw-r--r--");
/// assert_eq!(format_mode(FileKind::Directory, Some(0o755)), "drwxr-xr-x");
/// assert_eq!(format_mode(FileKind::Regular, None), "-?????????");
/// ```
pub fn format_mode(kind: FileKind, mode: Option<u32>) -> String {
    let perms = match mode {
        Some(mode) => {
            let user = triplet(mode, 0o400, 0o200, 0o100);
            let group = triplet(mode, 0o040, 0o020, 0o010);
            let other = triplet(mode, 0o004, 0o002, 0o001);
            format!("{}{}{}", user, group, other)
        }
        // 권한을 읽을 수 없는 플랫폼/상태
        None => "?????????".to_string(),
    };

    format!("{}{}", kind.type_char(), perms)
}

/// 권한 triplet (rwx) 생성
fn triplet(mode: u32, read: u32, write: u32, exec: u32) -> String {
    let r = if mode & read != 0 { "r" } else { "-" };
    let w = if mode & write != 0 { "w" } else { "-" };
    let x = if mode & exec != 0 { "x" } else { "-" };
    format!("{}{}{}", r, w, x)
}

/// 시스템 시간을 통일된 날짜 형식으로 포맷팅
///
/// 항상 "YYYY-MM-DD HH:MM" 형식 (16자 고정)
pub fn format_date(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M").to_string()
}
