//! # Browse feed filtering
//!
//! [`FeedQuery`] narrows and orders the project list shown on the browse page.
//! It never touches the source slice; [`FeedQuery::apply`] returns a new list.
//!
//! | Input | Effect |
//! |-------|--------|
//! | `text` | case-insensitive substring of project name, developer display name or username |
//! | `status` | exact status match unless [`StatusFilter::All`] |
//! | `sort` | stable descending by likes or stars; [`SortMode::None`] keeps server order |
//!
//! [`trending`] reuses the likes ordering for the home page sidebar.

use crate::models::{Project, ProjectStatus};

/// Status dropdown on the browse page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    ReadyForProduction,
    UnderDevelopment,
    OnlyAnIdea,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::ReadyForProduction,
        StatusFilter::UnderDevelopment,
        StatusFilter::OnlyAnIdea,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Statuses",
            StatusFilter::ReadyForProduction => "Ready for Production",
            StatusFilter::UnderDevelopment => "Under Development",
            StatusFilter::OnlyAnIdea => "Only an Idea",
        }
    }

    /// Stable value for `<select>` options.
    pub fn key(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::ReadyForProduction => "ready",
            StatusFilter::UnderDevelopment => "development",
            StatusFilter::OnlyAnIdea => "idea",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .unwrap_or_default()
    }

    pub fn matches(self, status: &ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::ReadyForProduction => *status == ProjectStatus::ReadyForProduction,
            StatusFilter::UnderDevelopment => *status == ProjectStatus::UnderDevelopment,
            StatusFilter::OnlyAnIdea => *status == ProjectStatus::OnlyAnIdea,
        }
    }
}

/// Sort dropdown on the browse page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    None,
    MostLiked,
    MostStarred,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::MostLiked, SortMode::MostStarred];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "Sort By",
            SortMode::MostLiked => "Most Liked",
            SortMode::MostStarred => "Most Starred",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::MostLiked => "likes",
            SortMode::MostStarred => "stars",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .unwrap_or_default()
    }
}

/// Current browse filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub text: String,
    pub status: StatusFilter,
    pub sort: SortMode,
}

impl FeedQuery {
    fn matches_text(project: &Project, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        project.name.to_lowercase().contains(needle)
            || project.developer_name().to_lowercase().contains(needle)
            || project.developer_username().to_lowercase().contains(needle)
    }

    /// Filter and sort `projects` into a new list.
    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        let needle = self.text.trim().to_lowercase();
        let mut matched: Vec<Project> = projects
            .iter()
            .filter(|p| Self::matches_text(p, &needle) && self.status.matches(&p.status))
            .cloned()
            .collect();

        // sort_by is stable, so equal counts keep server order.
        match self.sort {
            SortMode::None => {}
            SortMode::MostLiked => matched.sort_by(|a, b| b.likes.cmp(&a.likes)),
            SortMode::MostStarred => matched.sort_by(|a, b| b.stars.cmp(&a.stars)),
        }
        matched
    }

    /// No filter or sort is active.
    pub fn is_default(&self) -> bool {
        self.text.trim().is_empty() && self.status == StatusFilter::All && self.sort == SortMode::None
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// `"1 project found"` / `"N projects found"`.
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 project found".to_string()
    } else {
        format!("{count} projects found")
    }
}

/// The `limit` most liked projects, ties in feed order.
pub fn trending(projects: &[Project], limit: usize) -> Vec<Project> {
    let mut ranked = FeedQuery {
        sort: SortMode::MostLiked,
        ..FeedQuery::default()
    }
    .apply(projects);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Developer;

    fn project(id: i64, name: &str, dev: &str, status: ProjectStatus, likes: u64, stars: u64) -> Project {
        Project {
            id,
            name: name.to_string(),
            status,
            likes,
            stars,
            developer: Some(Developer::new(dev)),
            ..Project::default()
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "Ledger", "ada", ProjectStatus::ReadyForProduction, 5, 2),
            project(2, "Orbit", "grace", ProjectStatus::UnderDevelopment, 20, 2),
            project(3, "Compiler", "linus", ProjectStatus::OnlyAnIdea, 1, 9),
            project(4, "Ledger Lite", "grace", ProjectStatus::UnderDevelopment, 5, 0),
        ]
    }

    fn ids(projects: &[Project]) -> Vec<i64> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_query_keeps_everything_in_order() {
        let projects = sample();
        let query = FeedQuery::default();
        assert!(query.is_default());
        assert_eq!(ids(&query.apply(&projects)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_text_matches_name_and_developer() {
        let projects = sample();
        let mut query = FeedQuery {
            text: "  LEDGER ".to_string(),
            ..FeedQuery::default()
        };
        assert_eq!(ids(&query.apply(&projects)), vec![1, 4]);

        query.text = "grace".to_string();
        assert_eq!(ids(&query.apply(&projects)), vec![2, 4]);
    }

    #[test]
    fn test_text_matches_full_display_name() {
        let mut projects = sample();
        projects.push(Project {
            id: 5,
            name: "Engine".to_string(),
            developer: Some(Developer {
                username: "ada".to_string(),
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                ..Developer::default()
            }),
            ..Project::default()
        });
        let query = FeedQuery {
            text: "lovelace".to_string(),
            ..FeedQuery::default()
        };
        assert_eq!(ids(&query.apply(&projects)), vec![5]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let projects = sample();
        let query = FeedQuery {
            text: "e".to_string(),
            status: StatusFilter::UnderDevelopment,
            sort: SortMode::MostLiked,
        };
        let once = query.apply(&projects);
        let twice = query.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_most_liked_is_stable_descending() {
        let projects = vec![
            project(1, "a", "x", ProjectStatus::OnlyAnIdea, 5, 0),
            project(2, "b", "x", ProjectStatus::OnlyAnIdea, 20, 0),
            project(3, "c", "x", ProjectStatus::OnlyAnIdea, 1, 0),
        ];
        let query = FeedQuery {
            sort: SortMode::MostLiked,
            ..FeedQuery::default()
        };
        let likes: Vec<u64> = query.apply(&projects).iter().map(|p| p.likes).collect();
        assert_eq!(likes, vec![20, 5, 1]);

        // Ties keep their original relative order.
        let sorted = query.apply(&sample());
        assert_eq!(ids(&sorted), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_most_starred() {
        let query = FeedQuery {
            sort: SortMode::MostStarred,
            ..FeedQuery::default()
        };
        assert_eq!(ids(&query.apply(&sample())), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_status_filter_is_subset() {
        let projects = sample();
        for status in StatusFilter::ALL {
            let query = FeedQuery {
                status,
                ..FeedQuery::default()
            };
            let result = query.apply(&projects);
            assert!(result.iter().all(|p| projects.contains(p)));
            assert!(result.iter().all(|p| status.matches(&p.status)));
        }
    }

    #[test]
    fn test_source_is_untouched() {
        let projects = sample();
        let before = projects.clone();
        let _ = FeedQuery {
            sort: SortMode::MostLiked,
            ..FeedQuery::default()
        }
        .apply(&projects);
        assert_eq!(projects, before);
    }

    #[test]
    fn test_clear_and_labels() {
        let mut query = FeedQuery {
            text: "x".into(),
            status: StatusFilter::OnlyAnIdea,
            sort: SortMode::MostStarred,
        };
        assert!(!query.is_default());
        query.clear();
        assert!(query.is_default());

        assert_eq!(result_label(1), "1 project found");
        assert_eq!(result_label(0), "0 projects found");
        assert_eq!(StatusFilter::from_key("idea"), StatusFilter::OnlyAnIdea);
        assert_eq!(SortMode::from_key("bogus"), SortMode::None);
    }

    #[test]
    fn test_trending_takes_most_liked() {
        let projects = sample();
        assert_eq!(ids(&trending(&projects, 3)), vec![2, 1, 4]);
        assert_eq!(ids(&trending(&projects, 10)), vec![2, 1, 4, 3]);
        assert!(trending(&[], 5).is_empty());
    }
}
