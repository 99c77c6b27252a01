#![allow(dead_code)]
//! 액션 레지스트리 — 단일 진실 원천 (Single Source of Truth)
//!
//! 일반 모드의 모든 키 바인딩과 하단 바 힌트가 이 모듈의
//! 테이블을 참조합니다.

use crossterm::event::{KeyCode, KeyModifiers};

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    OpenColumn,
    CloseColumn,
    // File Operations
    CreateFile,
    DeleteFile,
    RenameFile,
    ToggleMove,
    // System
    Quit,
}

/// 하단 바 힌트 항목
pub struct HintEntry {
    pub key: &'static str,
    pub label: &'static str,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub hint: Option<HintEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        hint: None,
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        hint: None,
    },
    ActionDef {
        action: Action::OpenColumn,
        id: "open_column",
        hint: None,
    },
    ActionDef {
        action: Action::CloseColumn,
        id: "close_column",
        hint: None,
    },
    ActionDef {
        action: Action::CreateFile,
        id: "create_file",
        hint: Some(HintEntry {
            key: "n",
            label: "new",
        }),
    },
    ActionDef {
        action: Action::DeleteFile,
        id: "delete_file",
        hint: Some(HintEntry {
            key: "d",
            label: "del",
        }),
    },
    ActionDef {
        action: Action::RenameFile,
        id: "rename_file",
        hint: Some(HintEntry {
            key: "r",
            label: "ren",
        }),
    },
    ActionDef {
        action: Action::ToggleMove,
        id: "toggle_move",
        hint: Some(HintEntry {
            key: "m",
            label: "move",
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        hint: Some(HintEntry {
            key: "q",
            label: "quit",
        }),
    },
];

/// 일반 모드 키 바인딩
pub static KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        code: KeyCode::Up,
        modifiers: None,
        action: Action::MoveUp,
    },
    KeyBinding {
        code: KeyCode::Char('k'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::MoveUp,
    },
    KeyBinding {
        code: KeyCode::Down,
        modifiers: None,
        action: Action::MoveDown,
    },
    KeyBinding {
        code: KeyCode::Char('j'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::MoveDown,
    },
    KeyBinding {
        code: KeyCode::Right,
        modifiers: None,
        action: Action::OpenColumn,
    },
    KeyBinding {
        code: KeyCode::Char('l'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::OpenColumn,
    },
    KeyBinding {
        code: KeyCode::Left,
        modifiers: None,
        action: Action::CloseColumn,
    },
    KeyBinding {
        code: KeyCode::Char('h'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::CloseColumn,
    },
    KeyBinding {
        code: KeyCode::Char('n'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::CreateFile,
    },
    KeyBinding {
        code: KeyCode::Char('d'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::DeleteFile,
    },
    KeyBinding {
        code: KeyCode::Char('r'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::RenameFile,
    },
    KeyBinding {
        code: KeyCode::Char('m'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::ToggleMove,
    },
    KeyBinding {
        code: KeyCode::Char('q'),
        modifiers: Some(KeyModifiers::NONE),
        action: Action::Quit,
    },
];

/// 키 입력을 액션으로 변환 (일반 모드 전용)
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    KEY_BINDINGS
        .iter()
        .find(|binding| {
            binding.code == code
                && binding
                    .modifiers
                    .map(|m| m == modifiers)
                    .unwrap_or(true)
        })
        .map(|binding| binding.action)
}

/// 하단 바 힌트 문자열 생성
pub fn hint_line() -> String {
    ACTION_DEFS
        .iter()
        .filter_map(|def| def.hint.as_ref())
        .map(|hint| format!("{}:{}", hint.key, hint.label))
        .collect::<Vec<_>>()
        .join(" ")
}
