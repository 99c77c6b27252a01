#![allow(dead_code)]

use crate::models::{ColumnStack, DirectorySnapshot, PendingOperation};
use crate::system::{EntryStat, FileSystem};
use crate::ui::{LayoutManager, Theme};
use crate::utils::error::{ColsError, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

mod navigation;
mod operations;
mod text_edit;

#[cfg(test)]
mod tests;

/// 앱 상태
///
/// 프로세스당 하나. 탐색 상태(컬럼 스택)와 모달 하위 상태를 소유하며,
/// 모든 전이는 입력 디스패처가 호출하는 메서드를 통해서만 일어납니다.
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 컬럼 스택 (탐색 상태)
    pub stack: ColumnStack,
    /// 파일 시스템
    pub filesystem: FileSystem,
    /// 색상 테마
    pub theme: Theme,
    /// 진행 중인 모달 하위 상태
    pub pending: PendingOperation,
    /// 이동 모드 원본 (이동 대기 중일 때만 Some)
    pub move_source: Option<PathBuf>,
    /// 상단 바에 표시할 사용자 이름
    pub user: String,
    /// 상단 바에 표시할 호스트 이름
    pub host: String,
}

impl App {
    /// 시작 디렉토리로 앱 생성
    ///
    /// 시작 경로를 읽을 수 없으면 에러를 그대로 반환합니다 — 호출자가
    /// 화면 모드에 들어가기 전에 일반 텍스트로 보고해야 합니다.
    pub fn new(start_path: PathBuf) -> Result<Self> {
        let filesystem = FileSystem::new();

        if !filesystem.is_directory(&start_path) {
            return Err(ColsError::NotReadable { path: start_path });
        }

        let root = DirectorySnapshot::build(start_path, &filesystem)?;

        Ok(Self {
            should_quit: false,
            layout: LayoutManager::new(),
            stack: ColumnStack::new(root),
            filesystem,
            theme: Theme::dark(),
            pending: PendingOperation::None,
            move_source: None,
            user: resolve_user(),
            host: resolve_host(),
        })
    }

    /// 종료 여부
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 종료 플래그 설정
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 모달 하위 플로우 활성 여부
    pub fn is_modal(&self) -> bool {
        !self.pending.is_none()
    }

    /// 에러를 하단 바 상태 메시지로 보고
    ///
    /// 모든 파일 작업 실패는 여기로 모이며 프로세스를 종료시키지
    /// 않습니다. 키 하나로 확인 후 일반 모드로 복귀합니다.
    pub(crate) fn report_error(&mut self, err: ColsError) {
        self.move_source = None;
        self.pending = PendingOperation::Ack {
            message: err.to_string(),
        };
    }

    /// 선택 항목의 stat 요약 (하단 바 표시용)
    pub fn selected_stat(&self) -> Option<EntryStat> {
        let path = self.stack.active().selected_path()?;
        self.filesystem.stat(&path).ok()
    }

    /// 선택 항목의 미리보기 라인 (지원하지 않으면 빈 목록)
    pub fn preview_lines(&self, max_lines: usize) -> Vec<String> {
        let Some(path) = self.stack.active().selected_path() else {
            return Vec::new();
        };
        if !self.filesystem.is_previewable(&path) {
            return Vec::new();
        }
        self.filesystem.read_preview_lines(&path, max_lines)
    }
}

/// 환경에서 사용자 이름 해석 (없으면 "?")
fn resolve_user() -> String {
    for key in ["USER", "USERNAME", "LOGNAME"] {
        if let Ok(value) = env::var(key) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    "?".to_string()
}

/// 환경에서 호스트 이름 해석 (없으면 "localhost")
fn resolve_host() -> String {
    if let Ok(value) = env::var("HOSTNAME") {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    #[cfg(unix)]
    {
        if let Ok(contents) = fs::read_to_string("/etc/hostname") {
            let trimmed = contents.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    "localhost".to_string()
}
