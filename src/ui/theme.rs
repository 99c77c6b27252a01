#![allow(dead_code)]

use ratatui::style::Color;

/// 색상 테마
///
/// 애플리케이션 전체의 색상을 한곳에서 정의합니다.
#[derive(Debug, Clone)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 상단 바
    pub host_fg: ColorDef,
    pub path_fg: ColorDef,

    // 컬럼
    pub border: ColorDef,
    pub entry_normal: ColorDef,
    pub entry_selected: ColorDef,
    pub entry_selected_bg: ColorDef,

    // 하단 바
    pub bar_bg: ColorDef,
    pub bar_fg: ColorDef,
    pub hint_fg: ColorDef,

    // 미리보기
    pub preview_fg: ColorDef,

    // 강조
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        "reset" => Color::Reset,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            host_fg: "#4ec9b0".into(),
            path_fg: "#569cd6".into(),

            border: "#3c3c3c".into(),
            entry_normal: "#d4d4d4".into(),
            entry_selected: "Black".into(),
            entry_selected_bg: "Cyan".into(),

            bar_bg: "#2d2d30".into(),
            bar_fg: "#cccccc".into(),
            hint_fg: "#808080".into(),

            preview_fg: "#b0b0b0".into(),

            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
