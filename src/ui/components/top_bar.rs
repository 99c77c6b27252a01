#![allow(dead_code)]
// Top bar component - 상단 바 컴포넌트
//
// "<user>@<host> <경로>/ <선택 이름>" 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 상단 바 컴포넌트
pub struct TopBar<'a> {
    /// 사용자 이름
    user: &'a str,
    /// 호스트 이름
    host: &'a str,
    /// 활성 컬럼 경로
    path: &'a str,
    /// 선택된 엔트리 이름
    selected: &'a str,
    /// user@host 색상
    host_fg: Color,
    /// 경로 색상
    path_fg: Color,
    /// 일반 전경색
    fg_color: Color,
    /// 배경색
    bg_color: Color,
}

impl<'a> Default for TopBar<'a> {
    fn default() -> Self {
        Self {
            user: "",
            host: "",
            path: "",
            selected: "",
            host_fg: Color::Cyan,
            path_fg: Color::Blue,
            fg_color: Color::Gray,
            bg_color: Color::Reset,
        }
    }
}

impl<'a> TopBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자/호스트 설정
    pub fn identity(mut self, user: &'a str, host: &'a str) -> Self {
        self.user = user;
        self.host = host;
        self
    }

    /// 활성 경로 설정
    pub fn path(mut self, path: &'a str) -> Self {
        self.path = path;
        self
    }

    /// 선택된 이름 설정
    pub fn selected(mut self, selected: &'a str) -> Self {
        self.selected = selected;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.host_fg = theme.host_fg.to_color();
        self.path_fg = theme.path_fg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self
    }

    /// 너비 초과 시 마지막 칸을 `~`로 바꿔 자르기
    ///
    /// 컬럼 엔트리 이름과 같은 잘림 규칙을 사용합니다.
    fn fit(text: &str, max_width: usize) -> String {
        if text.width() <= max_width {
            return text.to_string();
        }

        let mut result = String::new();
        let mut current = 0;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(1);
            if current + w > max_width.saturating_sub(1) {
                break;
            }
            result.push(ch);
            current += w;
        }
        result.push('~');
        result
    }
}

impl Widget for TopBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let identity = format!("{}@{}", self.user, self.host);
        let path = format!("{}/", self.path.trim_end_matches('/'));

        // 전체 폭을 넘으면 경로부터 줄인다: identity는 항상 유지
        let width = area.width as usize;
        let identity_width = identity.width() + 1;
        let remaining = width.saturating_sub(identity_width);

        let composed = format!("{} {}", path, self.selected);
        let tail = if composed.width() > remaining {
            Self::fit(&composed, remaining)
        } else {
            composed
        };

        // path 부분과 selected 부분을 다시 나눠 색을 입힌다
        let (path_part, selected_part) = if tail.len() > path.len() && tail.starts_with(path.as_str()) {
            (&tail[..path.len()], tail[path.len() + 1..].trim_start())
        } else {
            (tail.as_str(), "")
        };

        let spans = vec![
            Span::styled(identity, Style::default().fg(self.host_fg)),
            Span::raw(" "),
            Span::styled(path_part.to_string(), Style::default().fg(self.path_fg)),
            Span::raw(" "),
            Span::styled(selected_part.to_string(), Style::default().fg(self.fg_color)),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
