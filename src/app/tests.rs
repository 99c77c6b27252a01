use super::*;
use crate::core::actions::Action;
use crate::models::ConfirmKind;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// 충분히 큰 가상 터미널로 앱 생성
fn make_app(root: &Path) -> App {
    let mut app = App::new(root.to_path_buf()).unwrap();
    app.layout.update(Rect::new(0, 0, 120, 40));
    app
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_text_input_key(KeyModifiers::NONE, KeyCode::Char(c));
    }
}

fn select_entry(app: &mut App, name: &str) {
    app.stack.active_mut().select(name);
    assert_eq!(
        app.stack.active().selected_name.as_deref(),
        Some(name),
        "fixture entry missing: {}",
        name
    );
}

/// 탐색 시나리오: 하위 디렉토리 열기 → 이동 → 닫기
#[test]
fn test_open_navigate_close_scenario() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b.txt"), "b").unwrap();
    fs::create_dir(temp.path().join("c")).unwrap();
    fs::write(temp.path().join("c").join("inner.txt"), "i").unwrap();

    let mut app = make_app(temp.path());
    assert_eq!(app.stack.len(), 1);
    assert_eq!(app.stack.active().entries, vec!["b.txt", "c"]);

    // "c" 선택 후 열기
    app.execute_action(Action::MoveDown);
    assert_eq!(app.stack.active().selected_name.as_deref(), Some("c"));

    app.execute_action(Action::OpenColumn);
    assert_eq!(app.stack.len(), 2);
    assert_eq!(app.stack.active().entries, vec!["inner.txt"]);

    // 닫으면 부모 컬럼의 선택이 그대로 복원
    app.execute_action(Action::CloseColumn);
    assert_eq!(app.stack.len(), 1);
    assert_eq!(app.stack.active().selected_name.as_deref(), Some("c"));

    // 루트 컬럼에서 닫기는 무동작
    app.execute_action(Action::CloseColumn);
    assert_eq!(app.stack.len(), 1);
}

/// 순환 이동: 마지막에서 아래로 → 처음, 처음에서 위로 → 마지막
#[test]
fn test_selection_wraps_in_both_directions() {
    let temp = TempDir::new().unwrap();
    for name in ["a", "b", "c"] {
        fs::write(temp.path().join(name), name).unwrap();
    }

    let mut app = make_app(temp.path());
    app.execute_action(Action::MoveUp);
    assert_eq!(app.stack.active().selected_name.as_deref(), Some("c"));

    app.execute_action(Action::MoveDown);
    assert_eq!(app.stack.active().selected_name.as_deref(), Some("a"));
}

/// 파일 선택 상태에서 열기는 조용한 무동작
#[test]
fn test_open_on_regular_file_is_noop() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("plain.txt"), "x").unwrap();

    let mut app = make_app(temp.path());
    app.execute_action(Action::OpenColumn);

    assert_eq!(app.stack.len(), 1);
    assert!(app.pending.is_none());
}

/// 화면 폭이 부족하면 열기 거부 (스택 불변, 에러 없음)
#[test]
fn test_open_vetoed_by_narrow_terminal() {
    let temp = TempDir::new().unwrap();
    let sub = temp.path().join("wide");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("a-very-long-entry-name-that-needs-room.txt"), "x").unwrap();

    let mut app = make_app(temp.path());
    app.layout.update(Rect::new(0, 0, 34, 24));
    select_entry(&mut app, "wide");

    app.execute_action(Action::OpenColumn);

    assert_eq!(app.stack.len(), 1);
    assert!(app.pending.is_none());
}

/// 생성 플로우: 입력 → Enter → 파일 생성 + 새 항목 선택
#[test]
fn test_create_file_flow_selects_new_entry() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("z.txt"), "z").unwrap();

    let mut app = make_app(temp.path());
    app.execute_action(Action::CreateFile);
    assert!(app.is_modal());

    type_text(&mut app, "a.txt");
    app.handle_text_input_key(KeyModifiers::NONE, KeyCode::Enter);

    assert!(temp.path().join("a.txt").exists());
    assert!(app.pending.is_none());
    assert_eq!(app.stack.active().selected_name.as_deref(), Some("a.txt"));
}

/// 빈 이름 제출은 상태 메시지로 거부
#[test]
fn test_create_empty_name_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("x"), "x").unwrap();

    let mut app = make_app(temp.path());
    app.execute_action(Action::CreateFile);
    app.handle_text_input_key(KeyModifiers::NONE, KeyCode::Enter);

    assert!(matches!(app.pending, PendingOperation::Ack { .. }));

    // 아무 키나 누르면 일반 모드 복귀
    app.handle_ack_key();
    assert!(app.pending.is_none());
}

/// 생성 충돌: 기존 이름 입력 시 상태 메시지, 내용 보존
#[test]
fn test_create_collision_reports_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("taken.txt"), "original").unwrap();

    let mut app = make_app(temp.path());
    app.execute_action(Action::CreateFile);
    type_text(&mut app, "taken.txt");
    app.handle_text_input_key(KeyModifiers::NONE, KeyCode::Enter);

    assert!(matches!(app.pending, PendingOperation::Ack { .. }));
    assert_eq!(
        fs::read_to_string(temp.path().join("taken.txt")).unwrap(),
        "original"
    );
}

/// Esc는 입력 취소 (파일 시스템 무변화)
#[test]
fn test_text_input_escape_cancels() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("x"), "x").unwrap();

    let mut app = make_app(temp.path());
    app.execute_action(Action::CreateFile);
    type_text(&mut app, "half-typed");
    app.handle_text_input_key(KeyModifiers::NONE, KeyCode::Esc);

    assert!(app.pending.is_none());
    assert!(!temp.path().join("half-typed").exists());
}

/// 삭제 확인: y는 삭제, n은 취소
#[test]
fn test_delete_confirm_and_cancel() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doomed.txt"), "x").unwrap();
    fs::write(temp.path().join("spared.txt"), "x").unwrap();

    let mut app = make_app(temp.path());
    select_entry(&mut app, "spared.txt");
    app.execute_action(Action::DeleteFile);
    assert!(matches!(
        app.pending,
        PendingOperation::Confirm {
            kind: ConfirmKind::Delete { .. }
        }
    ));

    // y/Y 이외의 키는 전부 취소
    app.handle_confirm_key(KeyCode::Char('n'));
    assert!(app.pending.is_none());
    assert!(temp.path().join("spared.txt").exists());

    select_entry(&mut app, "doomed.txt");
    app.execute_action(Action::DeleteFile);
    app.handle_confirm_key(KeyCode::Char('y'));

    assert!(!temp.path().join("doomed.txt").exists());
    assert!(app.pending.is_none());
    assert_eq!(app.stack.active().entries, vec!["spared.txt"]);
}

/// 디렉토리 삭제는 프롬프트 없이 거부
#[test]
fn test_delete_refuses_directory_before_prompt() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("subdir")).unwrap();

    let mut app = make_app(temp.path());
    app.execute_action(Action::DeleteFile);

    assert!(matches!(app.pending, PendingOperation::Ack { .. }));
    assert!(temp.path().join("subdir").exists());
}

/// 이름 변경 플로우: 원래 이름 프리필 → 수정 → 새 이름 선택
#[test]
fn test_rename_flow_selects_new_name() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("old.txt"), "content").unwrap();

    let mut app = make_app(temp.path());
    app.execute_action(Action::RenameFile);

    // 프리필된 버퍼를 비우고 새 이름 입력
    if let PendingOperation::TextInput { value, cursor_pos, .. } = &mut app.pending {
        value.clear();
        *cursor_pos = 0;
    }
    type_text(&mut app, "new.txt");
    app.handle_text_input_key(KeyModifiers::NONE, KeyCode::Enter);

    assert!(!temp.path().join("old.txt").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("new.txt")).unwrap(),
        "content"
    );
    assert_eq!(app.stack.active().selected_name.as_deref(), Some("new.txt"));
}

/// 이름 변경 충돌: 둘 다 보존, 상태 메시지
#[test]
fn test_rename_collision_keeps_both() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();
    fs::write(temp.path().join("b.txt"), "b").unwrap();

    let mut app = make_app(temp.path());
    select_entry(&mut app, "a.txt");
    app.execute_action(Action::RenameFile);
    if let PendingOperation::TextInput { value, cursor_pos, .. } = &mut app.pending {
        value.clear();
        *cursor_pos = 0;
    }
    type_text(&mut app, "b.txt");
    app.handle_text_input_key(KeyModifiers::NONE, KeyCode::Enter);

    assert!(matches!(app.pending, PendingOperation::Ack { .. }));
    assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "a");
    assert_eq!(fs::read_to_string(temp.path().join("b.txt")).unwrap(), "b");
}

/// 이동 시나리오: 원본 기억 → 다른 컬럼에서 확정 → 복사 + 원본 유지
#[test]
fn test_move_copies_into_active_column() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("payload.txt"), "data").unwrap();
    fs::create_dir(temp.path().join("target")).unwrap();

    let mut app = make_app(temp.path());
    select_entry(&mut app, "payload.txt");
    app.execute_action(Action::ToggleMove);
    assert!(app.move_source.is_some());
    assert!(app.pending.is_none());

    // 대상 디렉토리를 열어 활성 컬럼 변경
    select_entry(&mut app, "target");
    app.execute_action(Action::OpenColumn);
    assert_eq!(app.stack.len(), 2);

    app.execute_action(Action::ToggleMove);
    assert!(matches!(
        app.pending,
        PendingOperation::Confirm {
            kind: ConfirmKind::Move { .. }
        }
    ));

    app.handle_confirm_key(KeyCode::Char('y'));

    // 복사이지 삭제가 아님: 원본 보존
    assert!(temp.path().join("payload.txt").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("target").join("payload.txt")).unwrap(),
        "data"
    );
    assert!(app.move_source.is_none());
    assert_eq!(
        app.stack.active().selected_name.as_deref(),
        Some("payload.txt")
    );
}

/// 이동 취소는 원본 기억도 해제
#[test]
fn test_move_cancel_clears_source() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("f.txt"), "x").unwrap();

    let mut app = make_app(temp.path());
    app.execute_action(Action::ToggleMove);
    app.execute_action(Action::ToggleMove);
    app.handle_confirm_key(KeyCode::Char('n'));

    assert!(app.move_source.is_none());
    assert!(app.pending.is_none());
}

/// 이동 대상 충돌: 거부 + 기존 내용 보존 + 원본 해제
#[test]
fn test_move_dest_collision_refused() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("f.txt"), "source").unwrap();
    let target = temp.path().join("target");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("f.txt"), "existing").unwrap();

    let mut app = make_app(temp.path());
    select_entry(&mut app, "f.txt");
    app.execute_action(Action::ToggleMove);

    select_entry(&mut app, "target");
    app.execute_action(Action::OpenColumn);
    app.execute_action(Action::ToggleMove);
    app.handle_confirm_key(KeyCode::Char('y'));

    assert!(matches!(app.pending, PendingOperation::Ack { .. }));
    assert_eq!(
        fs::read_to_string(target.join("f.txt")).unwrap(),
        "existing"
    );
    assert!(app.move_source.is_none());
}

/// 디렉토리는 이동 원본이 될 수 없음
#[test]
fn test_move_refuses_directory_source() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("dir")).unwrap();

    let mut app = make_app(temp.path());
    app.execute_action(Action::ToggleMove);

    assert!(matches!(app.pending, PendingOperation::Ack { .. }));
    assert!(app.move_source.is_none());
}

/// 빈 디렉토리에서 파일 작업은 모두 무동작
#[test]
fn test_file_ops_noop_in_empty_directory() {
    let temp = TempDir::new().unwrap();

    let mut app = make_app(temp.path());
    assert!(app.stack.active().is_empty());

    app.execute_action(Action::DeleteFile);
    assert!(app.pending.is_none());

    app.execute_action(Action::RenameFile);
    assert!(app.pending.is_none());

    app.execute_action(Action::ToggleMove);
    assert!(app.move_source.is_none());

    app.execute_action(Action::MoveDown);
    app.execute_action(Action::OpenColumn);
    assert_eq!(app.stack.len(), 1);
}

/// 종료 액션
#[test]
fn test_quit_action() {
    let temp = TempDir::new().unwrap();
    let mut app = make_app(temp.path());

    assert!(!app.should_quit());
    app.execute_action(Action::Quit);
    assert!(app.should_quit());
}

/// 미리보기: 지원 확장자만, 줄 수 제한 준수
#[test]
fn test_preview_lines_for_selection() {
    let temp = TempDir::new().unwrap();
    let content: String = (0..30).map(|i| format!("line {}\n", i)).collect();
    fs::write(temp.path().join("note.txt"), content).unwrap();
    fs::write(temp.path().join("zz.bin"), [0u8, 1]).unwrap();

    let mut app = make_app(temp.path());
    select_entry(&mut app, "note.txt");
    let lines = app.preview_lines(20);
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "line 0");

    select_entry(&mut app, "zz.bin");
    assert!(app.preview_lines(20).is_empty());
}

/// 읽을 수 없는 시작 경로는 화면 진입 전 에러
#[test]
fn test_new_with_missing_start_path() {
    let result = App::new(PathBuf::from("/nonexistent/surely/missing"));
    assert!(matches!(result, Err(ColsError::NotReadable { .. })));
}
