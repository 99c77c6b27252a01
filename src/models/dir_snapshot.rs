#![allow(dead_code)]

use crate::system::FileSystem;
use crate::utils::error::Result;
use std::path::PathBuf;

/// 선택 이동 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// 디렉토리 스냅샷
///
/// 한 디렉토리의 정렬된 엔트리 목록과 현재 선택 상태.
/// `refresh` 전까지는 불변이며, 컬럼 하나가 스냅샷 하나에 대응합니다.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    /// 디렉토리 경로
    pub path: PathBuf,
    /// 엔트리 이름 목록 (바이트 오름차순, `.`/`..` 제외)
    pub entries: Vec<String>,
    /// 선택된 항목 인덱스
    pub selected_index: usize,
    /// 선택된 항목 이름의 소유 복사본 (빈 디렉토리면 None)
    ///
    /// entries 재구성 중에도 렌더링이 무효화되지 않도록 인덱스와
    /// 별도로 유지합니다.
    pub selected_name: Option<String>,
}

impl DirectorySnapshot {
    /// 디렉토리를 읽어 새 스냅샷 생성
    ///
    /// 읽을 수 없으면 `NotReadable`을 반환하며, 호출자는 이를 상태
    /// 메시지로 표시해야 합니다.
    pub fn build(path: PathBuf, filesystem: &FileSystem) -> Result<Self> {
        let entries = filesystem.list_names(&path)?;
        let selected_name = entries.first().cloned();

        Ok(Self {
            path,
            entries,
            selected_index: 0,
            selected_name,
        })
    }

    /// 디스크에서 엔트리 목록을 다시 읽기
    ///
    /// 이전 선택 이름이 남아 있으면 선택이 그 이름을 따라가고,
    /// 사라졌으면 `min(이전 인덱스, 새 길이 - 1)`로 클램프합니다.
    pub fn refresh(&mut self, filesystem: &FileSystem) -> Result<()> {
        let entries = filesystem.list_names(&self.path)?;

        let new_index = match &self.selected_name {
            Some(name) => entries
                .iter()
                .position(|e| e == name)
                .unwrap_or_else(|| self.selected_index.min(entries.len().saturating_sub(1))),
            None => 0,
        };

        self.entries = entries;
        self.selected_index = new_index;
        self.selected_name = self.entries.get(new_index).cloned();
        Ok(())
    }

    /// 선택을 순환 이동
    ///
    /// 마지막 항목에서 아래로 이동하면 첫 항목으로, 첫 항목에서 위로
    /// 이동하면 마지막 항목으로 돌아갑니다. 빈 디렉토리면 무동작.
    pub fn advance(&mut self, direction: MoveDirection) {
        if self.entries.is_empty() {
            return;
        }

        let len = self.entries.len();
        self.selected_index = match direction {
            MoveDirection::Down => (self.selected_index + 1) % len,
            MoveDirection::Up => (self.selected_index + len - 1) % len,
        };
        self.selected_name = Some(self.entries[self.selected_index].clone());
    }

    /// 이름으로 선택 이동 (생성/이름 변경 후 선택 복구용)
    ///
    /// 해당 이름이 없으면 선택을 바꾸지 않습니다.
    pub fn select(&mut self, name: &str) {
        if let Some(index) = self.entries.iter().position(|e| e == name) {
            self.selected_index = index;
            self.selected_name = Some(self.entries[index].clone());
        }
    }

    /// 빈 디렉토리 여부
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 선택된 항목의 전체 경로 (빈 디렉토리면 None)
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_name.as_ref().map(|name| self.path.join(name))
    }

    /// 가장 긴 엔트리 이름의 문자 수
    pub fn longest_entry_len(&self) -> usize {
        self.entries
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
    }
}
