//! 토스트 알림
//!
//! 페이지 컨트롤러는 전역 객체 대신 Notifier 인스턴스를 주입받아 사용한다.

use std::cell::RefCell;

pub const DEFAULT_DURATION_MS: u32 = 5000;
pub const SHORT_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    /// Font Awesome 아이콘 클래스
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error => "fa-exclamation-circle",
            ToastKind::Warning => "fa-exclamation-triangle",
            ToastKind::Info => "fa-info-circle",
        }
    }

    /// 제목 없는 짧은 알림에 쓰는 기본 제목
    pub fn default_title(&self) -> &'static str {
        match self {
            ToastKind::Success => "성공",
            ToastKind::Error => "오류",
            ToastKind::Warning => "경고",
            ToastKind::Info => "알림",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub duration_ms: u32,
}

/// 화면에 떠 있는 토스트 목록
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, title: &str, message: &str, duration_ms: u32) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            duration_ms,
        });
        self.next_id
    }

    /// 제목 없이 메시지만 (3초)
    pub fn push_short(&mut self, kind: ToastKind, message: &str) -> u64 {
        self.push(kind, kind.default_title(), message, SHORT_DURATION_MS)
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// 알림 서비스
pub trait Notifier {
    fn show(&self, kind: ToastKind, title: &str, message: &str);

    fn success(&self, title: &str, message: &str) {
        self.show(ToastKind::Success, title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.show(ToastKind::Error, title, message);
    }

    fn warning(&self, title: &str, message: &str) {
        self.show(ToastKind::Warning, title, message);
    }

    fn info(&self, title: &str, message: &str) {
        self.show(ToastKind::Info, title, message);
    }
}

/// 받은 알림을 기록만 한다
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    shown: RefCell<Vec<(ToastKind, String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<(ToastKind, String, String)> {
        self.shown.borrow().clone()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.shown.borrow().iter().filter(|(k, _, _)| *k == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, kind: ToastKind, title: &str, message: &str) {
        self.shown
            .borrow_mut()
            .push((kind, title.to_string(), message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_assigns_increasing_ids() {
        let mut queue = ToastQueue::new();
        let a = queue.push(ToastKind::Info, "a", "", DEFAULT_DURATION_MS);
        let b = queue.push(ToastKind::Error, "b", "", DEFAULT_DURATION_MS);
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::new();
        let id = queue.push(ToastKind::Success, "저장", "", DEFAULT_DURATION_MS);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_short_form() {
        let mut queue = ToastQueue::new();
        queue.push_short(ToastKind::Warning, "확인 필요");
        let toast = &queue.toasts()[0];
        assert_eq!(toast.title, "경고");
        assert_eq!(toast.duration_ms, SHORT_DURATION_MS);
    }

    #[test]
    fn test_recording_notifier_helpers() {
        let notifier = RecordingNotifier::new();
        notifier.success("a", "b");
        notifier.warning("c", "d");
        assert_eq!(notifier.count(ToastKind::Success), 1);
        assert_eq!(notifier.shown()[1], (ToastKind::Warning, "c".to_string(), "d".to_string()));
    }
}
