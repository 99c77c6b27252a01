use super::*;
use crate::core::actions::Action;
use crate::models::MoveDirection;
use crate::ui::layout;

impl App {
    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::MoveUp => self.move_selection(MoveDirection::Up),
            Action::MoveDown => self.move_selection(MoveDirection::Down),
            Action::OpenColumn => self.open_column(),
            Action::CloseColumn => self.close_column(),
            Action::CreateFile => self.request_create(),
            Action::DeleteFile => self.request_delete(),
            Action::RenameFile => self.request_rename(),
            Action::ToggleMove => self.toggle_move(),
        }
    }

    /// 활성 컬럼에서 선택 순환 이동 (I/O 없음, 스택 크기 불변)
    pub fn move_selection(&mut self, direction: MoveDirection) {
        self.stack.active_mut().advance(direction);
    }

    /// 선택된 하위 디렉토리를 새 컬럼으로 열기
    ///
    /// 선택이 디렉토리가 아니거나 화면 폭이 부족하면 조용한 무동작.
    /// 폭 부족은 용량 한계이지 사용자 에러가 아닙니다.
    pub fn open_column(&mut self) {
        let Some(candidate) = self.stack.active().selected_path() else {
            return;
        };

        if !self.filesystem.is_directory(&candidate) {
            return;
        }

        let longest = self.filesystem.longest_name_len(&candidate);
        let (terminal_width, _) = self.layout.terminal_size();
        if !layout::can_open(longest, self.stack.columns(), terminal_width) {
            return;
        }

        match DirectorySnapshot::build(candidate, &self.filesystem) {
            Ok(snapshot) => self.stack.open(snapshot),
            // 확인과 읽기 사이에 사라진 경우 등
            Err(err) => self.report_error(err),
        }
    }

    /// 맨 오른쪽 컬럼 닫기 (루트 컬럼은 닫히지 않음)
    pub fn close_column(&mut self) {
        self.stack.close();
    }

    /// 활성 컬럼을 디스크 기준으로 새로고침
    ///
    /// 파일 작업 후 호출. 스택 내 위치와 컬럼 정체성은 유지되고
    /// 엔트리/선택만 재구성됩니다. 실패하면 상태 메시지로 보고.
    pub(crate) fn refresh_active(&mut self) {
        let result = {
            let filesystem = &self.filesystem;
            self.stack.active_mut().refresh(filesystem)
        };
        if let Err(err) = result {
            self.report_error(err);
        }
    }
}
