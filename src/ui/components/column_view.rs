#![allow(dead_code)]
// Column component - 컬럼 엔트리 목록 컴포넌트
//
// 한 컬럼의 엔트리를 고정 폭으로 렌더링. 활성 컬럼의 선택 항목만
// 강조 표시한다 (비활성 컬럼의 선택은 강조하지 않음 - 포커스 단서).

use crate::ui::layout::visible_row_window;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 컬럼 컴포넌트
pub struct ColumnView<'a> {
    /// 엔트리 이름 목록
    entries: &'a [String],
    /// 선택된 항목 인덱스
    selected_index: usize,
    /// 활성 컬럼 여부
    is_active: bool,
    /// 일반 엔트리 색상
    normal_color: Color,
    /// 선택 엔트리 색상
    selected_color: Color,
    /// 선택 엔트리 배경색
    selected_bg_color: Color,
}

impl<'a> Default for ColumnView<'a> {
    fn default() -> Self {
        Self {
            entries: &[],
            selected_index: 0,
            is_active: false,
            normal_color: Color::Gray,
            selected_color: Color::Black,
            selected_bg_color: Color::Cyan,
        }
    }
}

impl<'a> ColumnView<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 엔트리 목록 설정
    pub fn entries(mut self, entries: &'a [String]) -> Self {
        self.entries = entries;
        self
    }

    /// 선택 인덱스 설정
    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    /// 활성 컬럼 여부 설정
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.normal_color = theme.entry_normal.to_color();
        self.selected_color = theme.entry_selected.to_color();
        self.selected_bg_color = theme.entry_selected_bg.to_color();
        self
    }

    /// 이름을 컬럼 폭에 맞춰 오른쪽 공백 패딩
    ///
    /// 폭을 넘는 이름은 마지막 내용 칸을 `~`로 바꿔 자릅니다.
    fn pad_name(name: &str, width: usize) -> String {
        let display_width = name.width();
        if display_width <= width {
            let padding = " ".repeat(width - display_width);
            return format!("{}{}", name, padding);
        }

        let mut result = String::new();
        let mut current = 0;
        for ch in name.chars() {
            let w = ch.width().unwrap_or(1);
            if current + w > width.saturating_sub(1) {
                break;
            }
            result.push(ch);
            current += w;
        }
        result.push('~');
        // 전각 문자 잘림으로 한 칸 모자랄 수 있음
        while result.width() < width {
            result.push(' ');
        }
        result
    }
}

impl Widget for ColumnView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let box_height = area.height as usize;
        let offset = visible_row_window(self.selected_index, box_height);

        for (row, (index, name)) in self
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(box_height)
            .enumerate()
        {
            let style = if self.is_active && index == self.selected_index {
                Style::default()
                    .fg(self.selected_color)
                    .bg(self.selected_bg_color)
            } else {
                Style::default().fg(self.normal_color)
            };

            let padded = Self::pad_name(name, area.width as usize);
            buf.set_string(area.x, area.y + row as u16, padded, style);
        }
    }
}
