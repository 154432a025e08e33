//! Sample releases inserted when the store is empty on first boot.
//!
//! Empty strings are kept as-is (not `None`) so seeded rows look exactly
//! like rows saved from the web form with blank inputs.

use crate::record::VersionDraft;

/// The three seed releases, newest first.
pub fn seed_drafts() -> [VersionDraft; 3] {
    [
        draft(
            "v2.2.0",
            "雙系統",
            "新增功能&功能修復",
            "確認要釋出的項目中",
            [
                "新增AI推薦功能、修復支付流程bug、優化介面設計",
                "正在進行需求確認，預計本週完成功能規格書",
                "",
                "",
                "",
                "",
                "預計下個月開始開發",
            ],
        ),
        draft(
            "v2.1.0",
            "雙系統",
            "新增功能",
            "開發中",
            [
                "新增會員等級系統、優化購物車流程、修復登入問題",
                "會員系統已完成80%，購物車優化進行中",
                "2024-01-15",
                "2024-01-20",
                "2024-01-25",
                "本次更新包含重要功能優化，提升用戶體驗",
                "需要特別注意會員資料遷移",
            ],
        ),
        draft(
            "v2.0.5",
            "iOS",
            "Bug修復",
            "完成上線",
            [
                "修復iOS 17兼容性問題、解決閃退問題",
                "已完成上線，監控中",
                "2024-01-05",
                "2024-01-08",
                "2024-01-10",
                "緊急修復版本，解決iOS 17兼容性問題",
                "已完成上線，用戶反饋良好",
            ],
        ),
    ]
}

/// `optional` is description, progress_summary, qa_date, submission_date,
/// live_date, release_notes, remarks.
fn draft(
    version: &str,
    os_type: &str,
    release_type: &str,
    status: &str,
    optional: [&str; 7],
) -> VersionDraft {
    let [description, progress_summary, qa_date, submission_date, live_date, release_notes, remarks] =
        optional.map(|s| Some(s.to_string()));
    VersionDraft {
        version: version.to_string(),
        os_type: os_type.to_string(),
        release_type: release_type.to_string(),
        status: status.to_string(),
        description,
        progress_summary,
        qa_date,
        submission_date,
        live_date,
        release_notes,
        remarks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{OS_DUAL, OS_IOS};

    #[test]
    fn seeds_are_valid_drafts() {
        for d in seed_drafts() {
            assert!(d.validate().is_ok(), "invalid seed {}", d.version);
        }
    }

    #[test]
    fn first_seed_is_planned_dual_platform_release() {
        let [first, second, third] = seed_drafts();
        assert_eq!(first.version, "v2.2.0");
        assert_eq!(first.os_type, OS_DUAL);
        assert_eq!(first.status, "確認要釋出的項目中");
        assert_eq!(first.qa_date.as_deref(), Some(""));
        assert_eq!(second.version, "v2.1.0");
        assert_eq!(third.os_type, OS_IOS);
        assert_eq!(third.live_date.as_deref(), Some("2024-01-10"));
    }
}
