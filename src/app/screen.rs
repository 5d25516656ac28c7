// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and the route table used for navigation.
//!
//! The current route path is the source of truth; the selected tab is
//! derived from it by matching the first path segment.

use crate::ui::icons::Glyph;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Analysis,
    Visualizations,
    Models,
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub label_key: &'static str,
    pub icon: Glyph,
    pub screen: Screen,
}

pub static ROUTES: [Route; 4] = [
    Route {
        path: "/",
        label_key: "nav-home",
        icon: Glyph::Home,
        screen: Screen::Home,
    },
    Route {
        path: "/analysis",
        label_key: "nav-analysis",
        icon: Glyph::Insights,
        screen: Screen::Analysis,
    },
    Route {
        path: "/visualizations",
        label_key: "nav-visualizations",
        icon: Glyph::BarChart,
        screen: Screen::Visualizations,
    },
    Route {
        path: "/models",
        label_key: "nav-models",
        icon: Glyph::Psychology,
        screen: Screen::Models,
    },
];

/// Reduces a path to its routing key: `/` or `/<first segment>`.
///
/// A missing leading slash is tolerated.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let first = trimmed
        .trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    if first.is_empty() {
        "/".to_string()
    } else {
        format!("/{first}")
    }
}

/// Index into [`ROUTES`] for a path. Unmatched paths select index 0.
#[must_use]
pub fn index_for_path(path: &str) -> usize {
    let key = normalize_path(path);
    ROUTES
        .iter()
        .position(|route| route.path == key)
        .unwrap_or(0)
}

impl Screen {
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        ROUTES[index_for_path(path)].screen
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Screen::Home => 0,
            Screen::Analysis => 1,
            Screen::Visualizations => 2,
            Screen::Models => 3,
        }
    }

    #[must_use]
    pub fn route(self) -> &'static Route {
        &ROUTES[self.index()]
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        self.route().path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_route_resolves_to_its_own_index() {
        for (index, route) in ROUTES.iter().enumerate() {
            assert_eq!(index_for_path(route.path), index);
            assert_eq!(route.screen.index(), index);
        }
    }

    #[test]
    fn sub_paths_match_on_first_segment() {
        assert_eq!(index_for_path("/analysis/age"), 1);
        assert_eq!(index_for_path("/models/xgboost/"), 3);
        assert_eq!(index_for_path("/visualizations?tab=2"), 2);
    }

    #[test]
    fn unmatched_paths_select_home() {
        assert_eq!(index_for_path("/unknown"), 0);
        assert_eq!(index_for_path(""), 0);
        assert_eq!(index_for_path("/Analysis"), 0);
    }

    #[test]
    fn leading_slash_is_optional() {
        assert_eq!(normalize_path("models"), "/models");
        assert_eq!(Screen::from_path("analysis"), Screen::Analysis);
    }

    #[test]
    fn screen_path_round_trips() {
        for route in ROUTES {
            assert_eq!(Screen::from_path(route.screen.path()), route.screen);
        }
    }
}
