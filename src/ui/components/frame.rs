#![allow(dead_code)]
// Frame component - 테두리/구분선 컴포넌트
//
// 컨텐츠 영역 전체를 감싸는 사각형과 컬럼 경계마다 하나씩의 세로
// 구분선을 그린다. 구분선이 바깥 테두리와 만나는 곳은 T자 접합.

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// 테두리 컴포넌트
pub struct BrowserFrame {
    /// 세로 구분선 x 좌표 목록 (터미널 기준)
    separators: Vec<u16>,
    /// 테두리 색상
    border_color: Color,
}

impl Default for BrowserFrame {
    fn default() -> Self {
        Self {
            separators: Vec::new(),
            border_color: Color::DarkGray,
        }
    }
}

impl BrowserFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컬럼 구분선 위치 설정
    pub fn separators(mut self, separators: Vec<u16>) -> Self {
        self.separators = separators;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_color = theme.border.to_color();
        self
    }
}

impl Widget for BrowserFrame {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let style = Style::default().fg(self.border_color);
        let top = area.y;
        let bottom = area.y + area.height - 1;
        let left = area.x;
        let right = area.x + area.width - 1;

        // 가로 변
        for x in (left + 1)..right {
            buf.set_string(x, top, "─", style);
            buf.set_string(x, bottom, "─", style);
        }

        // 세로 변
        for y in (top + 1)..bottom {
            buf.set_string(left, y, "│", style);
            buf.set_string(right, y, "│", style);
        }

        // 모서리
        buf.set_string(left, top, "┌", style);
        buf.set_string(right, top, "┐", style);
        buf.set_string(left, bottom, "└", style);
        buf.set_string(right, bottom, "┘", style);

        // 컬럼 구분선 + T자 접합
        for &x in &self.separators {
            if x <= left || x >= right {
                continue;
            }
            buf.set_string(x, top, "┬", style);
            for y in (top + 1)..bottom {
                buf.set_string(x, y, "│", style);
            }
            buf.set_string(x, bottom, "┴", style);
        }
    }
}
