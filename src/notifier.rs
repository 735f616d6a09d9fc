//! 터미널 알림 (오류/경고는 stderr)

use voucher_ai_common::notify::{Notifier, ToastKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNotifier;

pub fn format_notice(kind: ToastKind, title: &str, message: &str) -> String {
    let mark = match kind {
        ToastKind::Success => "✔",
        ToastKind::Error => "✖",
        ToastKind::Warning => "⚠",
        ToastKind::Info => "-",
    };
    if title.is_empty() {
        format!("{} {}", mark, message)
    } else {
        format!("{} {}: {}", mark, title, message)
    }
}

impl Notifier for StdoutNotifier {
    fn show(&self, kind: ToastKind, title: &str, message: &str) {
        let line = format_notice(kind, title, message);
        match kind {
            ToastKind::Error | ToastKind::Warning => eprintln!("{}", line),
            ToastKind::Success | ToastKind::Info => println!("{}", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_notice() {
        assert_eq!(format_notice(ToastKind::Success, "저장", "완료"), "✔ 저장: 완료");
        assert_eq!(format_notice(ToastKind::Warning, "", "중복"), "⚠ 중복");
    }
}
