//! 모달 열림 상태와 포커스 순환

/// 모달 이름 (한 번에 하나만 연다)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    CreateWorkspace,
    RenameWorkspace,
    BulkProject,
    VoucherEdit,
    Preview,
}

impl ModalId {
    pub fn dom_id(&self) -> &'static str {
        match self {
            ModalId::CreateWorkspace => "create-workspace-modal",
            ModalId::RenameWorkspace => "rename-workspace-modal",
            ModalId::BulkProject => "bulk-project-modal",
            ModalId::VoucherEdit => "voucher-edit-modal",
            ModalId::Preview => "preview-modal",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<ModalId>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 다른 모달이 열려 있으면 바꿔 연다
    pub fn show(&mut self, id: ModalId) {
        self.open = Some(id);
    }

    /// 해당 모달이 열려 있을 때만 닫는다
    pub fn hide(&mut self, id: ModalId) -> bool {
        if self.open == Some(id) {
            self.open = None;
            true
        } else {
            false
        }
    }

    /// Escape: 열린 모달을 닫고 그 이름을 돌려준다
    pub fn escape(&mut self) -> Option<ModalId> {
        self.open.take()
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open == Some(id)
    }

    pub fn current(&self) -> Option<ModalId> {
        self.open
    }

    /// 열린 모달이 있으면 body 스크롤을 막는다
    pub fn body_overflow(&self) -> &'static str {
        if self.open.is_some() {
            "hidden"
        } else {
            ""
        }
    }
}

/// Tab 키로 포커스를 옮길 위치.
///
/// 마지막 요소에서 Tab 이면 처음으로, 처음에서 Shift+Tab 이면 마지막으로 돌린다.
/// 그 밖의 경우 None (브라우저 기본 동작).
pub fn next_focus(current: Option<usize>, len: usize, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        (None, true) => Some(last),
        (None, false) => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_escape() {
        let mut state = ModalState::new();
        assert_eq!(state.escape(), None);
        state.show(ModalId::BulkProject);
        assert!(state.is_open(ModalId::BulkProject));
        assert_eq!(state.body_overflow(), "hidden");
        assert_eq!(state.escape(), Some(ModalId::BulkProject));
        assert_eq!(state.current(), None);
        assert_eq!(state.body_overflow(), "");
    }

    #[test]
    fn test_hide_other_modal_is_noop() {
        let mut state = ModalState::new();
        state.show(ModalId::Preview);
        assert!(!state.hide(ModalId::VoucherEdit));
        assert!(state.is_open(ModalId::Preview));
        assert!(state.hide(ModalId::Preview));
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(next_focus(Some(2), 3, false), Some(0));
        assert_eq!(next_focus(Some(0), 3, true), Some(2));
        assert_eq!(next_focus(Some(1), 3, false), None);
        assert_eq!(next_focus(Some(1), 3, true), None);
        assert_eq!(next_focus(None, 3, false), Some(0));
        assert_eq!(next_focus(Some(0), 0, false), None);
        assert_eq!(next_focus(Some(0), 1, false), Some(0));
    }
}
