#![allow(dead_code)]
// Bottom bar component - 하단 바 컴포넌트
//
// 일반 모드: 선택 항목의 권한/수정 시각 + 우측 정렬 키 힌트.
// 모달 모드: 입력 프롬프트 / 확인 질문 / 상태 메시지.

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 하단 바 표시 내용
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BottomBarContent {
    /// 일반 모드: 권한 문자열 + 수정 시각
    Normal { mode_line: String, date: String },
    /// 이동 대기: 이동 중인 원본 경로
    MovePending { source: String },
    /// 모달 프롬프트 (텍스트 입력/확인)
    Prompt { text: String },
    /// 상태 메시지 (아무 키로 닫음)
    Status { message: String },
}

/// 하단 바 컴포넌트
pub struct BottomBar<'a> {
    /// 표시 내용
    content: BottomBarContent,
    /// 우측 정렬 키 힌트
    hint: &'a str,
    /// 배경색
    bg_color: Color,
    /// 전경색
    fg_color: Color,
    /// 힌트 색상
    hint_fg: Color,
    /// 상태/경고 색상
    warning_color: Color,
}

impl<'a> Default for BottomBar<'a> {
    fn default() -> Self {
        Self {
            content: BottomBarContent::Normal {
                mode_line: String::new(),
                date: String::new(),
            },
            hint: "",
            bg_color: Color::Reset,
            fg_color: Color::Gray,
            hint_fg: Color::DarkGray,
            warning_color: Color::Yellow,
        }
    }
}

impl<'a> BottomBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 표시 내용 설정
    pub fn content(mut self, content: BottomBarContent) -> Self {
        self.content = content;
        self
    }

    /// 키 힌트 설정
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bar_bg.to_color();
        self.fg_color = theme.bar_fg.to_color();
        self.hint_fg = theme.hint_fg.to_color();
        self.warning_color = theme.warning.to_color();
        self
    }
}

impl Widget for BottomBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let (left_text, left_style, show_hint) = match &self.content {
            BottomBarContent::Normal { mode_line, date } => (
                format!(" {}  {}", mode_line, date),
                Style::default().fg(self.fg_color),
                true,
            ),
            BottomBarContent::MovePending { source } => (
                format!(" Moving: {}", source),
                Style::default()
                    .fg(self.warning_color)
                    .add_modifier(Modifier::BOLD),
                true,
            ),
            BottomBarContent::Prompt { text } => (
                format!(" {}", text),
                Style::default().fg(self.fg_color).add_modifier(Modifier::BOLD),
                false,
            ),
            BottomBarContent::Status { message } => (
                format!(" {} (press any key)", message),
                Style::default()
                    .fg(self.warning_color)
                    .add_modifier(Modifier::BOLD),
                false,
            ),
        };

        let hint = if show_hint { self.hint } else { "" };

        // 우측 정렬 힌트를 위한 패딩 계산
        let left_width = left_text.width();
        let hint_width = hint.width() + 1;
        let padding_len = (area.width as usize).saturating_sub(left_width + hint_width);
        let padding = " ".repeat(padding_len);

        let spans = vec![
            Span::styled(left_text, left_style),
            Span::raw(padding),
            Span::styled(format!("{} ", hint), Style::default().fg(self.hint_fg)),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
