#![allow(dead_code)]

use crate::models::dir_snapshot::DirectorySnapshot;

/// 컬럼 스택 (탐색 상태)
///
/// 열려 있는 디렉토리 스냅샷의 순서열. 인덱스 0이 가장 왼쪽(루트 쪽)
/// 컬럼이며, 각 컬럼은 연 시점에 왼쪽 이웃의 선택 항목이었던 하위
/// 디렉토리입니다. 스택은 실행 중 절대 비지 않습니다.
#[derive(Debug, Clone)]
pub struct ColumnStack {
    /// 열린 컬럼들 (인덱스 0 = 루트 쪽)
    columns: Vec<DirectorySnapshot>,
    /// 키 입력을 받는 컬럼 인덱스. 스택 변형 후에는 항상 맨 오른쪽.
    active_index: usize,
}

impl ColumnStack {
    /// 시작 디렉토리 스냅샷으로 스택 생성
    pub fn new(root: DirectorySnapshot) -> Self {
        Self {
            columns: vec![root],
            active_index: 0,
        }
    }

    /// 새 컬럼을 맨 오른쪽에 열고 활성화
    pub fn open(&mut self, snapshot: DirectorySnapshot) {
        self.columns.push(snapshot);
        self.active_index = self.columns.len() - 1;
    }

    /// 맨 오른쪽 컬럼 닫기
    ///
    /// 루트 컬럼 하나만 남았을 때는 무동작. 닫은 뒤에는 새 맨 오른쪽
    /// 컬럼이 활성화됩니다. 반환값: 실제로 닫았는지 여부.
    pub fn close(&mut self) -> bool {
        if self.columns.len() <= 1 {
            return false;
        }

        self.columns.pop();
        self.active_index = self.columns.len() - 1;
        true
    }

    /// 활성 컬럼 참조
    pub fn active(&self) -> &DirectorySnapshot {
        &self.columns[self.active_index]
    }

    /// 활성 컬럼 가변 참조
    pub fn active_mut(&mut self) -> &mut DirectorySnapshot {
        &mut self.columns[self.active_index]
    }

    /// 활성 컬럼 인덱스
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// 열린 컬럼 목록
    pub fn columns(&self) -> &[DirectorySnapshot] {
        &self.columns
    }

    /// 열린 컬럼 수
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        // 불변식: 스택은 비지 않는다
        false
    }
}
