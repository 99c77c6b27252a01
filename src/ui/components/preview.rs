#![allow(dead_code)]
// Preview component - 텍스트 미리보기 컴포넌트
//
// 인식되는 텍스트 파일의 앞부분을 컨텐츠 영역 우측 절반에 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

/// 미리보기 컴포넌트
pub struct PreviewPane<'a> {
    /// 표시할 라인들 (이미 줄 수 예산만큼 잘려 있음)
    lines: &'a [String],
    /// 전경색
    fg_color: Color,
}

impl<'a> Default for PreviewPane<'a> {
    fn default() -> Self {
        Self {
            lines: &[],
            fg_color: Color::Gray,
        }
    }
}

impl<'a> PreviewPane<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 라인 설정
    pub fn lines(mut self, lines: &'a [String]) -> Self {
        self.lines = lines;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.preview_fg.to_color();
        self
    }

    /// 라인을 표시 폭에 맞게 자르기 (탭은 공백으로 치환)
    fn clip_line(line: &str, max_width: usize) -> String {
        let mut result = String::new();
        let mut current = 0;
        for ch in line.chars() {
            let ch = if ch == '\t' { ' ' } else { ch };
            let w = ch.width().unwrap_or(0);
            if current + w > max_width {
                break;
            }
            result.push(ch);
            current += w;
        }
        result
    }
}

impl Widget for PreviewPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }

        let style = Style::default().fg(self.fg_color);
        for (row, line) in self.lines.iter().take(area.height as usize).enumerate() {
            let clipped = Self::clip_line(line, area.width as usize);
            buf.set_string(area.x, area.y + row as u16, clipped, style);
        }
    }
}
