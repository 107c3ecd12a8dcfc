//! The closed category set for logged time.

use serde::{Deserialize, Serialize};

/// Category of a logged interval.
///
/// Closed enumeration: consumers must match all seven variants. The UI
/// label/color tables below cover every variant so a new category fails to
/// compile rather than rendering blank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DeepWork,
    Meetings,
    Email,
    Admin,
    Break,
    Personal,
    Away,
}

impl Category {
    /// All categories in the fixed table order used by summary segments.
    pub const ALL: [Category; 7] = [
        Category::DeepWork,
        Category::Meetings,
        Category::Email,
        Category::Admin,
        Category::Break,
        Category::Personal,
        Category::Away,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DeepWork => "deep_work",
            Category::Meetings => "meetings",
            Category::Email => "email",
            Category::Admin => "admin",
            Category::Break => "break",
            Category::Personal => "personal",
            Category::Away => "away",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "deep_work" => Some(Category::DeepWork),
            "meetings" => Some(Category::Meetings),
            "email" => Some(Category::Email),
            "admin" => Some(Category::Admin),
            "break" => Some(Category::Break),
            "personal" => Some(Category::Personal),
            "away" => Some(Category::Away),
            _ => None,
        }
    }

    /// Human-readable label shown in pickers, legends and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::DeepWork => "Deep Work",
            Category::Meetings => "Meetings",
            Category::Email => "Email",
            Category::Admin => "Admin",
            Category::Break => "Break",
            Category::Personal => "Personal",
            Category::Away => "Away",
        }
    }

    /// Hex color used for chart segments and timeline slots.
    pub fn color(&self) -> &'static str {
        match self {
            Category::DeepWork => "#4F46E5",
            Category::Meetings => "#7C3AED",
            Category::Email => "#2563EB",
            Category::Admin => "#0891B2",
            Category::Break => "#059669",
            Category::Personal => "#D97706",
            Category::Away => "#6B7280",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
