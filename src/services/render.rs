//! Tree line formatting.
//!
//! ```text
//! │   ├── 📁 src (3 days ago)
//! │   │   ├── 📄 lib.rs (2 hours ago)
//! │   │   └── 📄 main.rs (just now)
//! ```

use std::time::SystemTime;

/// Indentation unit, repeated once per depth level
pub const INDENT_UNIT: &str = "│   ";

/// Branch glyph for every entry except the last file of a directory
pub const BRANCH_MID: &str = "├── ";

/// Branch glyph for the last file of a directory
pub const BRANCH_LAST: &str = "└── ";

pub const FOLDER_ICON: &str = "📁";
pub const FILE_ICON: &str = "📄";

/// Format the age of `modified` relative to `now`.
///
/// Timestamps in the future count as "just now".
pub fn format_relative_age(modified: SystemTime, now: SystemTime) -> String {
    let seconds = match now.duration_since(modified) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    };
    relative_age_from_seconds(seconds)
}

/// Coarsest non-zero unit of an elapsed time in seconds.
///
/// Unit words are always plural ("1 minutes ago"); existing reports depend on
/// this exact wording.
pub fn relative_age_from_seconds(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{} days ago", days)
    } else if hours > 0 {
        format!("{} hours ago", hours)
    } else if minutes > 0 {
        format!("{} minutes ago", minutes)
    } else {
        "just now".to_string()
    }
}

fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Line for a directory at `depth` (never the root).
pub fn render_directory_line(depth: usize, name: &str, age: &str) -> String {
    format!("{}{}{} {} ({})", indent(depth), BRANCH_MID, FOLDER_ICON, name, age)
}

/// Line for a file inside a directory at `dir_depth`.
pub fn render_file_line(dir_depth: usize, name: &str, is_last: bool, age: &str) -> String {
    let branch = if is_last { BRANCH_LAST } else { BRANCH_MID };
    format!("{}{}{} {} ({})", indent(dir_depth + 1), branch, FILE_ICON, name, age)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    #[test]
    fn test_relative_age_units() {
        assert_eq!(relative_age_from_seconds(30), "just now");
        assert_eq!(relative_age_from_seconds(90), "1 minutes ago");
        assert_eq!(relative_age_from_seconds(7200), "2 hours ago");
        assert_eq!(relative_age_from_seconds(3 * 86_400 + 5), "3 days ago");
    }

    #[test]
    fn test_relative_age_boundaries() {
        assert_eq!(relative_age_from_seconds(59), "just now");
        assert_eq!(relative_age_from_seconds(60), "1 minutes ago");
        assert_eq!(relative_age_from_seconds(3599), "59 minutes ago");
        assert_eq!(relative_age_from_seconds(3600), "1 hours ago");
        assert_eq!(relative_age_from_seconds(86_399), "23 hours ago");
        assert_eq!(relative_age_from_seconds(86_400), "1 days ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let now = SystemTime::now();
        let modified = now + Duration::from_secs(7200);
        assert_eq!(format_relative_age(modified, now), "just now");
    }

    #[test]
    fn test_format_relative_age_from_system_time() {
        let now = SystemTime::now();
        assert_eq!(
            format_relative_age(now - Duration::from_secs(90), now),
            "1 minutes ago"
        );
        assert_eq!(
            format_relative_age(now - Duration::from_millis(7_200_500), now),
            "2 hours ago"
        );
    }

    #[test]
    fn test_render_directory_line() {
        assert_eq!(
            render_directory_line(1, "src", "just now"),
            "│   ├── 📁 src (just now)"
        );
        assert_eq!(
            render_directory_line(2, "nested", "2 hours ago"),
            "│   │   ├── 📁 nested (2 hours ago)"
        );
    }

    #[test]
    fn test_render_file_line_glyphs() {
        assert_eq!(
            render_file_line(0, "a.txt", false, "just now"),
            "│   ├── 📄 a.txt (just now)"
        );
        assert_eq!(
            render_file_line(1, "z.txt", true, "1 days ago"),
            "│   │   └── 📄 z.txt (1 days ago)"
        );
    }

    proptest! {
        #[test]
        fn prop_age_uses_coarsest_unit(seconds in 0i64..10_000_000) {
            let age = relative_age_from_seconds(seconds);
            if seconds >= 86_400 {
                prop_assert_eq!(age, format!("{} days ago", seconds / 86_400));
            } else if seconds >= 3600 {
                prop_assert_eq!(age, format!("{} hours ago", seconds / 3600));
            } else if seconds >= 60 {
                prop_assert_eq!(age, format!("{} minutes ago", seconds / 60));
            } else {
                prop_assert_eq!(age, "just now");
            }
        }

        #[test]
        fn prop_negative_elapsed_is_just_now(seconds in i64::MIN / 2..0) {
            prop_assert_eq!(relative_age_from_seconds(seconds), "just now");
        }
    }
}
