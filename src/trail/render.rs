//! Trail markup.
//!
//! Two snippets are produced for a page:
//!
//! | Snippet | Shape |
//! |---------|-------|
//! | navigation bar | `<div class="trail-nav-bar">top&nbsp;previous up next</div>` |
//! | listing | `<div class="trail-itemized"><ul><li>..</li>\n</ul></div>` |
//!
//! Missing neighbors render as empty strings so templates never fail on the
//! first or last page of a trail.

use super::{TrailItem, navigate, search, stem};
use std::fmt::Write;

/// Static link back to the site index.
pub const TOP_CONTROL: &str = r#"<b>Top:</b> <a href="index.html">Index</a>"#;

/// Render `<a href="{link}.html">{text}</a>`, or `""` for no item.
pub fn item_link(item: Option<&TrailItem>) -> String {
    item.map(|item| format!(r#"<a href="{}.html">{}</a>"#, item.link, item.text))
        .unwrap_or_default()
}

/// Render `<b>{title}</b>: {link}`, or `""` for no item.
pub fn control(title: &str, item: Option<&TrailItem>) -> String {
    match item {
        Some(_) => format!("<b>{title}</b>: {}", item_link(item)),
        None => String::new(),
    }
}

/// Navigation bar for the page `current`.
///
/// A page outside the trail still gets the Top control.
pub fn nav_bar(forest: &[TrailItem], current: &str) -> String {
    let (previous, up, next) = match search::find(forest, current) {
        Some(item) => (
            navigate::previous(forest, item),
            navigate::up(forest, item),
            navigate::next(forest, item),
        ),
        None => (None, None, None),
    };

    format!(
        r#"<div class="trail-nav-bar">{TOP_CONTROL}&nbsp;{} {} {}</div>"#,
        control("Previous", previous),
        control("Up", up),
        control("Next", next),
    )
}

/// Render `items` as a nested unordered list.
///
/// A subtrail's `<ul>` directly follows its owner's `<li>`.
pub fn listing(items: &[TrailItem]) -> String {
    let mut html = String::from(r#"<div class="trail-itemized"><ul>"#);
    write_items(&mut html, items);
    html.push_str("</ul></div>");
    html
}

fn write_items(html: &mut String, items: &[TrailItem]) {
    for item in items {
        // Writing to a String cannot fail
        let _ = writeln!(html, "<li>{}</li>", item_link(Some(item)));
        if let Some(subtrail) = &item.subtrail {
            html.push_str("<ul>");
            write_items(html, subtrail);
            html.push_str("</ul>");
        }
    }
}

/// Listing for the page `current`.
///
/// - the index page lists the whole forest
/// - a page owning a subtrail lists that subtrail
/// - any other page (or a page outside the trail) gets `None`
pub fn listing_for(forest: &[TrailItem], current: &str, index: &str) -> Option<String> {
    if stem(current) == index {
        return Some(listing(forest));
    }

    search::find(forest, current)
        .and_then(|item| item.subtrail.as_deref())
        .map(listing)
}

/// Plain-text outline for terminals, two spaces per level.
///
/// ```text
/// Sub (sub)
///   S1 (s1)
/// ```
pub fn outline(items: &[TrailItem]) -> String {
    fn walk(out: &mut String, items: &[TrailItem], depth: usize) {
        for item in items {
            let _ = writeln!(out, "{:indent$}{} ({})", "", item.text, item.link, indent = depth * 2);
            if let Some(subtrail) = &item.subtrail {
                walk(out, subtrail, depth + 1);
            }
        }
    }

    let mut out = String::new();
    walk(&mut out, items, 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::sample_forest;

    #[test]
    fn test_item_link() {
        let item = TrailItem::new("Intro", "intro");
        assert_eq!(item_link(Some(&item)), r#"<a href="intro.html">Intro</a>"#);
        assert_eq!(item_link(None), "");
    }

    #[test]
    fn test_control() {
        let item = TrailItem::new("End", "end");
        assert_eq!(
            control("Next", Some(&item)),
            r#"<b>Next</b>: <a href="end.html">End</a>"#
        );
        assert_eq!(control("Up", None), "");
    }

    #[test]
    fn test_nav_bar_nested_item() {
        let forest = sample_forest();
        assert_eq!(
            nav_bar(&forest, "s1"),
            concat!(
                r#"<div class="trail-nav-bar"><b>Top:</b> <a href="index.html">Index</a>&nbsp;"#,
                r#" <b>Up</b>: <a href="sub.html">Sub</a>"#,
                r#" <b>Next</b>: <a href="s2.html">S2</a></div>"#,
            )
        );
    }

    #[test]
    fn test_nav_bar_all_neighbors() {
        let forest = sample_forest();
        assert_eq!(
            nav_bar(&forest, "content/sub.typ"),
            concat!(
                r#"<div class="trail-nav-bar"><b>Top:</b> <a href="index.html">Index</a>&nbsp;"#,
                r#"<b>Previous</b>: <a href="intro.html">Intro</a>"#,
                r#"  <b>Next</b>: <a href="end.html">End</a></div>"#,
            )
        );
    }

    #[test]
    fn test_nav_bar_without_neighbors() {
        let forest = vec![TrailItem::new("Only", "only")];
        let expected = format!(r#"<div class="trail-nav-bar">{TOP_CONTROL}&nbsp;  </div>"#);

        assert_eq!(nav_bar(&forest, "only"), expected);
        assert_eq!(nav_bar(&forest, "not-in-trail"), expected);
        assert_eq!(nav_bar(&[], "anything"), expected);
    }

    #[test]
    fn test_listing_flat() {
        let items = vec![TrailItem::new("A", "a"), TrailItem::new("B", "b")];
        assert_eq!(
            listing(&items),
            concat!(
                r#"<div class="trail-itemized"><ul><li><a href="a.html">A</a></li>"#,
                "\n",
                r#"<li><a href="b.html">B</a></li>"#,
                "\n</ul></div>",
            )
        );
    }

    #[test]
    fn test_listing_interleaves_subtrail() {
        // [A [B], C]: B's list sits between A's entry and C's entry
        let forest = vec![
            TrailItem::new("A", "a").with_subtrail(vec![TrailItem::new("B", "b")]),
            TrailItem::new("C", "c"),
        ];
        assert_eq!(
            listing(&forest),
            concat!(
                r#"<div class="trail-itemized"><ul><li><a href="a.html">A</a></li>"#,
                "\n",
                r#"<ul><li><a href="b.html">B</a></li>"#,
                "\n</ul>",
                r#"<li><a href="c.html">C</a></li>"#,
                "\n</ul></div>",
            )
        );
    }

    #[test]
    fn test_listing_empty() {
        assert_eq!(listing(&[]), r#"<div class="trail-itemized"><ul></ul></div>"#);
    }

    #[test]
    fn test_listing_for_index_renders_forest() {
        let forest = sample_forest();
        assert_eq!(
            listing_for(&forest, "content/index.typ", "index"),
            Some(listing(&forest))
        );
    }

    #[test]
    fn test_listing_for_item_with_subtrail() {
        let forest = sample_forest();
        let rendered = listing_for(&forest, "sub", "index").unwrap();

        assert!(rendered.contains("s1.html"));
        assert!(rendered.contains("s2.html"));
        assert!(!rendered.contains("intro.html"));
    }

    #[test]
    fn test_listing_for_leaf_or_unknown() {
        let forest = sample_forest();
        assert_eq!(listing_for(&forest, "s1", "index"), None);
        assert_eq!(listing_for(&forest, "missing", "index"), None);
    }

    #[test]
    fn test_outline() {
        assert_eq!(
            outline(&sample_forest()),
            "Intro (intro)\nSub (sub)\n  S1 (s1)\n  S2 (s2)\nEnd (end)\n"
        );
        assert_eq!(outline(&[]), "");
    }

    #[test]
    fn test_listing_for_custom_index() {
        let forest = sample_forest();
        assert!(listing_for(&forest, "contents", "contents").is_some());
        assert_eq!(listing_for(&forest, "index", "contents"), None);
    }
}
