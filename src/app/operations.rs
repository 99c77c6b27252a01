use super::text_edit::TextBufferEdit;
use super::*;
use crate::models::{ConfirmKind, TextInputKind};
use crossterm::event::{KeyCode, KeyModifiers};

impl App {
    // === 일반 모드 진입점 ===

    /// 새 파일 생성 플로우 시작 (텍스트 입력 모드 진입)
    pub fn request_create(&mut self) {
        self.pending = PendingOperation::TextInput {
            kind: TextInputKind::Create,
            value: String::new(),
            cursor_pos: 0,
        };
    }

    /// 삭제 플로우 시작 (확인 모드 진입)
    ///
    /// 일반 파일만 삭제 대상입니다. 디렉토리는 프롬프트 전에
    /// `NotRegularFile`로 거부합니다.
    pub fn request_delete(&mut self) {
        let Some(name) = self.stack.active().selected_name.clone() else {
            return;
        };
        let path = self.stack.active().path.join(&name);

        match self.filesystem.stat(&path) {
            Ok(stat) if stat.kind == crate::utils::formatter::FileKind::Regular => {
                self.pending = PendingOperation::Confirm {
                    kind: ConfirmKind::Delete { name },
                };
            }
            Ok(_) => self.report_error(ColsError::NotRegularFile { path }),
            Err(err) => self.report_error(err),
        }
    }

    /// 이름 변경 플로우 시작 (원래 이름을 프리필한 텍스트 입력)
    pub fn request_rename(&mut self) {
        let Some(original) = self.stack.active().selected_name.clone() else {
            return;
        };

        let cursor_pos = original.len();
        self.pending = PendingOperation::TextInput {
            kind: TextInputKind::Rename {
                original: original.clone(),
            },
            value: original,
            cursor_pos,
        };
    }

    /// 이동 모드 토글
    ///
    /// 첫 번째 `m`: 선택된 일반 파일을 원본으로 기억.
    /// 두 번째 `m`: 활성 컬럼 디렉토리로의 복사를 확인받는다.
    pub fn toggle_move(&mut self) {
        match self.move_source.take() {
            Some(source) => {
                self.pending = PendingOperation::Confirm {
                    kind: ConfirmKind::Move {
                        source: source.clone(),
                    },
                };
                self.move_source = Some(source);
            }
            None => {
                let Some(path) = self.stack.active().selected_path() else {
                    return;
                };
                match self.filesystem.stat(&path) {
                    Ok(stat) if stat.kind == crate::utils::formatter::FileKind::Regular => {
                        self.move_source = Some(path);
                    }
                    Ok(_) => self.report_error(ColsError::NotRegularFile { path }),
                    Err(err) => self.report_error(err),
                }
            }
        }
    }

    // === 모달 키 처리 ===

    /// 텍스트 입력 모드 키 처리
    pub fn handle_text_input_key(&mut self, _modifiers: KeyModifiers, code: KeyCode) {
        let PendingOperation::TextInput {
            kind,
            value,
            cursor_pos,
        } = &mut self.pending
        else {
            return;
        };

        match code {
            KeyCode::Enter => {
                let kind = kind.clone();
                let value = value.clone();
                self.pending = PendingOperation::None;
                self.submit_text_input(kind, value);
            }
            KeyCode::Esc => {
                self.pending = PendingOperation::None;
            }
            KeyCode::Char(c) => TextBufferEdit::insert_char(value, cursor_pos, c),
            KeyCode::Backspace => TextBufferEdit::backspace(value, cursor_pos),
            KeyCode::Delete => TextBufferEdit::delete(value, cursor_pos),
            KeyCode::Left => TextBufferEdit::left(value, cursor_pos),
            KeyCode::Right => TextBufferEdit::right(value, cursor_pos),
            KeyCode::Home => TextBufferEdit::home(cursor_pos),
            KeyCode::End => TextBufferEdit::end(value, cursor_pos),
            _ => {}
        }
    }

    /// 확인 모드 키 처리 — `y`/`Y`만 진행, 그 외 모든 키는 취소
    pub fn handle_confirm_key(&mut self, code: KeyCode) {
        let PendingOperation::Confirm { kind } = &self.pending else {
            return;
        };
        let kind = kind.clone();
        self.pending = PendingOperation::None;

        let confirmed = matches!(code, KeyCode::Char('y') | KeyCode::Char('Y'));
        if !confirmed {
            // 취소 시 이동 원본도 함께 해제
            self.move_source = None;
            return;
        }

        match kind {
            ConfirmKind::Delete { name } => self.execute_delete(&name),
            ConfirmKind::Move { source } => self.execute_move(&source),
        }
    }

    /// 상태 메시지 확인 — 아무 키나 누르면 일반 모드 복귀
    pub fn handle_ack_key(&mut self) {
        if matches!(self.pending, PendingOperation::Ack { .. }) {
            self.pending = PendingOperation::None;
        }
    }

    // === 실행 ===

    /// 텍스트 입력 제출 (생성/이름 변경 공통 분기)
    fn submit_text_input(&mut self, kind: TextInputKind, value: String) {
        let name = value.trim().to_string();
        if name.is_empty() {
            self.pending = PendingOperation::Ack {
                message: "empty name rejected".to_string(),
            };
            return;
        }

        match kind {
            TextInputKind::Create => self.execute_create(&name),
            TextInputKind::Rename { original } => {
                if original != name {
                    self.execute_rename(&original, &name);
                }
            }
        }
    }

    /// 빈 파일 생성 후 활성 컬럼 새로고침 + 새 파일 선택
    fn execute_create(&mut self, name: &str) {
        let path = self.stack.active().path.join(name);

        if let Err(err) = self.filesystem.create_file(&path) {
            self.report_error(err);
            return;
        }

        self.refresh_active();
        self.stack.active_mut().select(name);
    }

    /// 선택된 일반 파일 삭제 후 새로고침
    fn execute_delete(&mut self, name: &str) {
        let path = self.stack.active().path.join(name);

        if let Err(err) = self.filesystem.delete_file(&path) {
            self.report_error(err);
            return;
        }

        self.refresh_active();
    }

    /// 이름 변경 후 새로고침 + 새 이름 선택
    fn execute_rename(&mut self, original: &str, new_name: &str) {
        let old_path = self.stack.active().path.join(original);
        let new_path = self.stack.active().path.join(new_name);

        if let Err(err) = self.filesystem.rename(&old_path, &new_path) {
            self.report_error(err);
            return;
        }

        self.refresh_active();
        self.stack.active_mut().select(new_name);
    }

    /// 원본을 활성 컬럼 디렉토리로 4 KiB 버퍼 복사
    ///
    /// 원본은 제거하지 않습니다 (복사 동작 유지). 대상 충돌은
    /// `AlreadyExists`로 거부합니다.
    fn execute_move(&mut self, source: &std::path::Path) {
        let Some(file_name) = source.file_name() else {
            self.move_source = None;
            return;
        };
        let dest = self.stack.active().path.join(file_name);

        if let Err(err) = self.filesystem.copy_file(source, &dest) {
            self.report_error(err);
            return;
        }

        self.move_source = None;
        self.refresh_active();
        if let Some(name) = file_name.to_str() {
            self.stack.active_mut().select(name);
        }
    }
}
