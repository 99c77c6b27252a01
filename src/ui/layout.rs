#![allow(dead_code)]
// Layout system - 컬럼 지오메트리 계산
//
// (컬럼 스택, 터미널 크기) → 각 컬럼의 화면 위치/너비를 계산하는
// 순수 함수들과 프레임 영역 분할:
// - 32+ cols: 브라우저 모드
// - <32 cols: 경고 화면 표시

use crate::models::{ColumnStack, DirectorySnapshot};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 32;
pub const MIN_HEIGHT: u16 = 8;

/// 컬럼 이름 좌우 여백
pub const COLUMN_LEFT_PADDING: u16 = 1;
pub const COLUMN_RIGHT_PADDING: u16 = 5;
/// 컬럼 최소 너비 (0폭 컬럼 방지)
pub const MIN_COLUMN_WIDTH: u16 = 8;

/// 엔트리 목록을 실제로 그리는 컬럼 수 (맨 오른쪽부터)
///
/// 나머지 열린 컬럼은 구분선과 누적 폭에만 기여합니다.
/// 미리보기 패널 공간 확보를 위한 제한입니다.
pub const VISIBLE_LIST_COLUMNS: usize = 2;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 브라우저 모드
    Browser,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 컬럼 하나의 화면 배치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGeometry {
    /// 컬럼 시작 x 좌표 (터미널 기준)
    pub x: u16,
    /// 내용 너비
    pub width: u16,
    /// 엔트리 목록을 그리는지 여부 (맨 오른쪽 2개만 true)
    pub draws_entries: bool,
}

/// 스냅샷 하나의 컬럼 너비
///
/// 좌측 여백 + 가장 긴 이름 + 우측 여백, 최소 `MIN_COLUMN_WIDTH`.
pub fn column_width(snapshot: &DirectorySnapshot) -> u16 {
    let longest = snapshot.longest_entry_len() as u16;
    (COLUMN_LEFT_PADDING + longest + COLUMN_RIGHT_PADDING).max(MIN_COLUMN_WIDTH)
}

/// 다음 컬럼이 시작할 x 좌표
///
/// 각 컬럼은 오른쪽 세로 구분선용으로 1칸을 추가로 차지합니다.
pub fn next_column_start(columns: &[DirectorySnapshot]) -> u16 {
    1 + columns
        .iter()
        .map(|c| column_width(c) + 1)
        .sum::<u16>()
}

/// 새 컬럼을 열 수 있는지 검사
///
/// 후보 디렉토리의 가장 긴 이름까지 화면 안에 들어가야 엽니다.
/// false면 우측 탐색은 조용한 무동작입니다 (에러 아님).
pub fn can_open(candidate_longest: usize, columns: &[DirectorySnapshot], terminal_width: u16) -> bool {
    let start = next_column_start(columns) as usize;
    start + candidate_longest < terminal_width as usize
}

/// 선택 항목이 보이도록 하는 스크롤 오프셋
///
/// 목록이 뷰포트를 넘으면 선택 행이 항상 마지막 가시 행이 되도록
/// 오프셋을 계산합니다 (중앙 정렬 없음).
pub fn visible_row_window(selected_index: usize, box_height: usize) -> usize {
    if box_height == 0 {
        return selected_index;
    }
    selected_index.saturating_sub(box_height - 1)
}

/// 전체 컬럼 스택의 화면 배치 계산
///
/// 모든 열린 컬럼이 위치를 갖지만 맨 오른쪽 `VISIBLE_LIST_COLUMNS`개만
/// 엔트리 목록을 그립니다.
pub fn column_geometries(stack: &ColumnStack) -> Vec<ColumnGeometry> {
    let columns = stack.columns();
    let first_visible = columns.len().saturating_sub(VISIBLE_LIST_COLUMNS);

    let mut geometries = Vec::with_capacity(columns.len());
    let mut x = 1u16;

    for (i, snapshot) in columns.iter().enumerate() {
        let width = column_width(snapshot);
        geometries.push(ColumnGeometry {
            x,
            width,
            draws_entries: i >= first_visible,
        });
        x += width + 1;
    }

    geometries
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 바 영역 (user@host + 경로)
    pub top_bar: Rect,
    /// 컬럼/테두리/미리보기 영역
    pub content: Rect,
    /// 하단 바 영역 (권한/힌트/상태)
    pub bottom_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Browser,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Browser
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = self.calculate_areas(area);
    }

    /// 레이아웃 영역 계산
    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        if self.mode == LayoutMode::TooSmall {
            return LayoutAreas {
                warning: area,
                ..Default::default()
            };
        }

        // 수직 레이아웃: 상단 바 | 컨텐츠 | 하단 바
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        LayoutAreas {
            top_bar: chunks[0],
            content: chunks[1],
            bottom_bar: chunks[2],
            warning: Rect::default(),
        }
    }

    /// 미리보기 패널 영역 (터미널 우측 절반, 박스 상단 바로 아래)
    pub fn preview_area(&self) -> Rect {
        let (width, height) = self.terminal_size;
        let x = width / 2;
        Rect {
            x,
            y: self.areas.content.y + 1,
            width: (width / 2).saturating_sub(3),
            height: height.saturating_sub(4),
        }
    }

    /// 현재 레이아웃 모드 반환
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// 레이아웃 영역 반환
    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    /// 터미널 크기 반환
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// 터미널이 너무 작은지 확인
    pub fn is_too_small(&self) -> bool {
        matches!(self.mode, LayoutMode::TooSmall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::FileSystem;
    use std::fs;
    use tempfile::TempDir;

    fn snapshot_of(names: &[&str]) -> (TempDir, DirectorySnapshot) {
        let temp = TempDir::new().unwrap();
        for name in names {
            fs::write(temp.path().join(name), name).unwrap();
        }
        let snapshot =
            DirectorySnapshot::build(temp.path().to_path_buf(), &FileSystem::new()).unwrap();
        (temp, snapshot)
    }

    #[test]
    fn test_column_width_from_longest_name() {
        let (_temp, snapshot) = snapshot_of(&["ab", "abcdefgh"]);
        // 1 + 8 + 5 = 14
        assert_eq!(column_width(&snapshot), 14);
    }

    #[test]
    fn test_column_width_floor() {
        let (_temp, snapshot) = snapshot_of(&["a"]);
        // 1 + 1 + 5 = 7 → 최소 8로 올림
        assert_eq!(column_width(&snapshot), MIN_COLUMN_WIDTH);
    }

    #[test]
    fn test_next_column_start_accumulates_separators() {
        let (_temp, a) = snapshot_of(&["12345678"]);
        let (_temp2, b) = snapshot_of(&["1234"]);
        let columns = vec![a, b];

        // 1 + (14+1) + (10+1) = 27
        assert_eq!(next_column_start(&columns), 27);
    }

    #[test]
    fn test_can_open_vetoes_overflow() {
        let (_temp, a) = snapshot_of(&["12345678"]);
        let columns = vec![a];
        // 시작 16 + 이름 10 = 26

        assert!(can_open(10, &columns, 27));
        assert!(!can_open(10, &columns, 26));
    }

    #[test]
    fn test_visible_row_window() {
        // 뷰포트 안이면 오프셋 0
        assert_eq!(visible_row_window(0, 10), 0);
        assert_eq!(visible_row_window(9, 10), 0);
        // 넘어가면 선택 행이 마지막 가시 행
        assert_eq!(visible_row_window(10, 10), 1);
        assert_eq!(visible_row_window(25, 10), 16);
    }

    #[test]
    fn test_column_geometries_last_two_draw_entries() {
        let temp = TempDir::new().unwrap();
        let mut names = Vec::new();
        for name in ["a", "b", "c"] {
            fs::create_dir(temp.path().join(name)).unwrap();
            names.push(name);
        }

        let fs_mod = FileSystem::new();
        let root = DirectorySnapshot::build(temp.path().to_path_buf(), &fs_mod).unwrap();
        let mut stack = ColumnStack::new(root);
        stack.open(DirectorySnapshot::build(temp.path().join("a"), &fs_mod).unwrap());
        stack.open(DirectorySnapshot::build(temp.path().join("b"), &fs_mod).unwrap());

        let geometries = column_geometries(&stack);

        assert_eq!(geometries.len(), 3);
        assert!(!geometries[0].draws_entries);
        assert!(geometries[1].draws_entries);
        assert!(geometries[2].draws_entries);
        // 첫 컬럼은 테두리 안쪽 x=1에서 시작
        assert_eq!(geometries[0].x, 1);
        assert_eq!(geometries[1].x, geometries[0].x + geometries[0].width + 1);
    }

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Browser);
        assert_eq!(LayoutManager::determine_mode(32, 8), LayoutMode::Browser);
        assert_eq!(LayoutManager::determine_mode(31, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 7), LayoutMode::TooSmall);
    }

    #[test]
    fn test_layout_areas() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 80, 24));

        let areas = manager.areas();
        assert_eq!(areas.top_bar.height, 1);
        assert_eq!(areas.bottom_bar.height, 1);
        assert_eq!(areas.content.height, 22);
        assert_eq!(areas.bottom_bar.y, 23);
    }

    #[test]
    fn test_preview_area_dimensions() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 80, 24));

        let preview = manager.preview_area();
        assert_eq!(preview.x, 40);
        assert_eq!(preview.y, 2);
        // terminal_height - 4 줄 예산
        assert_eq!(preview.height, 20);
        assert_eq!(preview.width, 37);
    }
}
