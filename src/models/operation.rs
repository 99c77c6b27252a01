#![allow(dead_code)]

use std::path::PathBuf;

/// 텍스트 입력을 기다리는 작업 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputKind {
    /// 새 파일 생성
    Create,
    /// 이름 변경 (원래 이름 보관)
    Rename { original: String },
}

impl TextInputKind {
    /// 입력 프롬프트 라벨
    pub fn prompt(&self) -> String {
        match self {
            TextInputKind::Create => "New file: ".to_string(),
            TextInputKind::Rename { original } => format!("Rename '{}' to: ", original),
        }
    }
}

/// 확인을 기다리는 작업 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmKind {
    /// 선택된 일반 파일 삭제
    Delete { name: String },
    /// 이동(복사) 대상 확정
    Move { source: PathBuf },
}

impl ConfirmKind {
    /// 확인 프롬프트 문자열 (y/Y만 진행)
    pub fn prompt(&self) -> String {
        match self {
            ConfirmKind::Delete { name } => format!("Delete '{}'? (y/N)", name),
            ConfirmKind::Move { source } => {
                format!("Copy '{}' here? (y/N)", source.display())
            }
        }
    }
}

/// 진행 중인 모달 하위 상태
///
/// 파일 작업 하위 플로우가 활성인 동안에만 존재하며, 완료/취소/에러
/// 시 `None`으로 돌아갑니다. 모달 상태에서는 모든 키 입력이 해당
/// 하위 플로우로 소비됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingOperation {
    /// 일반 모드
    #[default]
    None,
    /// 텍스트 입력 중 (생성/이름 변경)
    TextInput {
        kind: TextInputKind,
        value: String,
        cursor_pos: usize,
    },
    /// 단일 키 확인 대기 (삭제/이동)
    Confirm { kind: ConfirmKind },
    /// 상태 메시지 표시 중 — 아무 키나 누르면 일반 모드로 복귀
    Ack { message: String },
}

impl PendingOperation {
    /// 일반 모드 여부
    pub fn is_none(&self) -> bool {
        matches!(self, PendingOperation::None)
    }
}
