use chrono::{DateTime, Timelike, Utc};

pub const HEART_LIKED: &str = "❤️";
pub const HEART_EMPTY: &str = "♡";

/// 帖子时间的展示格式，例如 `January 1, 2024, 12:00 a.m.`（UTC）
pub fn display_timestamp(ts: &DateTime<Utc>) -> String {
    let meridiem = if ts.hour() < 12 { "a.m." } else { "p.m." };
    format!("{} {}", ts.format("%B %-d, %Y, %-I:%M"), meridiem)
}

pub fn like_label(liked: bool, num_likes: u64) -> String {
    let heart = if liked { HEART_LIKED } else { HEART_EMPTY };
    format!("{} {}", heart, num_likes)
}

pub fn follower_label(num_followers: u64) -> String {
    if num_followers == 1 {
        "1 follower".to_string()
    } else {
        format!("{} followers", num_followers)
    }
}

pub fn profile_href(username: &str) -> String {
    format!("/profile/{}", username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_timestamp() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(display_timestamp(&midnight), "January 1, 2024, 12:00 a.m.");

        let afternoon = Utc.with_ymd_and_hms(2023, 11, 23, 15, 7, 0).unwrap();
        assert_eq!(display_timestamp(&afternoon), "November 23, 2023, 3:07 p.m.");

        let noon = Utc.with_ymd_and_hms(2024, 6, 9, 12, 30, 0).unwrap();
        assert_eq!(display_timestamp(&noon), "June 9, 2024, 12:30 p.m.");
    }

    #[test]
    fn test_labels() {
        assert_eq!(like_label(true, 3), "❤️ 3");
        assert_eq!(like_label(false, 0), "♡ 0");
        assert_eq!(follower_label(0), "0 followers");
        assert_eq!(follower_label(1), "1 follower");
        assert_eq!(follower_label(2), "2 followers");
        assert_eq!(profile_href("alice"), "/profile/alice");
    }
}
