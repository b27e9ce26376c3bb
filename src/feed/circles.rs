//! Circle labels and badges for the photo on screen.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::FeedItem;

/// Badge colors, picked per circle id.
pub const CIRCLE_PALETTE: [&str; 6] = [
    "#4F8EF7", "#45BFA3", "#E6A23C", "#8D6AF1", "#E67A7A", "#4AB2D6",
];

/// A circle the viewer belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    /// Backend circle id.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Small round marker for one circle a photo was shared into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircleBadge {
    /// Backend circle id.
    pub id: String,
    /// Circle name, `"Circle"` when the viewer does not know it.
    pub name: String,
    /// Uppercased first letter of the name.
    pub initial: char,
    /// Badge color from [`CIRCLE_PALETTE`].
    pub color: &'static str,
}

/// Stable palette color for a circle id.
#[must_use]
pub fn color_for_circle(id: &str) -> &'static str {
    let len = CIRCLE_PALETTE.len();
    let hash = id
        .encode_utf16()
        .fold(0_usize, |hash, unit| (hash + usize::from(unit)) % len);
    CIRCLE_PALETTE[hash]
}

fn names_by_id(circles: &[Circle]) -> FxHashMap<&str, &str> {
    circles
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect()
}

/// Header text for the photo on screen.
///
/// `"Feed"` with nothing on screen, `"Circle Feed"` when none of the
/// photo's circles are known, up to two names joined, otherwise the first
/// two names and a count of the rest.
#[must_use]
pub fn circle_title(item: Option<&FeedItem>, circles: &[Circle]) -> String {
    let Some(item) = item else {
        return "Feed".to_owned();
    };
    let by_id = names_by_id(circles);
    let names: Vec<&str> = item
        .circle_ids
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).copied())
        .collect();

    match names.as_slice() {
        [] => "Circle Feed".to_owned(),
        [one] => (*one).to_owned(),
        [a, b] => format!("{a}, {b}"),
        [a, b, rest @ ..] => format!("{a}, {b} +{}", rest.len()),
    }
}

/// One badge per circle the photo was shared into, in the photo's order.
#[must_use]
pub fn circle_badges(
    item: Option<&FeedItem>,
    circles: &[Circle],
) -> Vec<CircleBadge> {
    let Some(item) = item else {
        return Vec::new();
    };
    let by_id = names_by_id(circles);
    item.circle_ids
        .iter()
        .map(|id| {
            let name = by_id.get(id.as_str()).copied().unwrap_or("Circle");
            let initial = name
                .chars()
                .next()
                .and_then(|c| c.to_uppercase().next())
                .unwrap_or('C');
            CircleBadge {
                id: id.clone(),
                name: name.to_owned(),
                initial,
                color: color_for_circle(id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::test_item;

    fn circle(id: &str, name: &str) -> Circle {
        Circle {
            id: id.to_owned(),
            name: name.to_owned(),
        }
    }

    fn item_in(ids: &[&str]) -> FeedItem {
        let mut item = test_item("p", 0);
        item.circle_ids = ids.iter().map(|&id| id.to_owned()).collect();
        item
    }

    #[test]
    fn title_variants() {
        let circles = [
            circle("a", "Family"),
            circle("b", "Climbing"),
            circle("c", "Work"),
            circle("d", "Band"),
        ];
        assert_eq!(circle_title(None, &circles), "Feed");
        assert_eq!(
            circle_title(Some(&item_in(&["x"])), &circles),
            "Circle Feed"
        );
        assert_eq!(circle_title(Some(&item_in(&["a"])), &circles), "Family");
        assert_eq!(
            circle_title(Some(&item_in(&["a", "x", "b"])), &circles),
            "Family, Climbing"
        );
        assert_eq!(
            circle_title(Some(&item_in(&["a", "b", "c", "d"])), &circles),
            "Family, Climbing +2"
        );
    }

    #[test]
    fn badges_fall_back_for_unknown_circles() {
        let circles = [circle("a", "family")];
        let badges = circle_badges(Some(&item_in(&["a", "zz"])), &circles);
        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0].name, "family");
        assert_eq!(badges[0].initial, 'F');
        assert_eq!(badges[1].name, "Circle");
        assert_eq!(badges[1].initial, 'C');
        assert!(circle_badges(None, &circles).is_empty());
    }

    #[test]
    fn palette_color_is_char_code_sum() {
        // 'a' = 97, 97 % 6 = 1
        assert_eq!(color_for_circle("a"), CIRCLE_PALETTE[1]);
        // 'a' + 'b' = 195, 195 % 6 = 3
        assert_eq!(color_for_circle("ab"), CIRCLE_PALETTE[3]);
        assert_eq!(color_for_circle(""), CIRCLE_PALETTE[0]);
    }
}
