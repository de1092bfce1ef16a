//! Static page rendering.
//!
//! A pure function of (processed entries, tag index, kind index) → one HTML
//! document. Uses [maud](https://maud.lambda.xyz/) for compile-time checked,
//! auto-escaped templates; CSS and the client-side filtering script are
//! embedded at compile time so the output is a single self-contained file.
//!
//! Every card carries the entry's full state as data attributes
//! (`data-idx`, `data-tags`, `data-kind`, `data-title`, `data-tagstr`) —
//! the client script filters and sorts purely from those, with no second
//! data source.

use crate::manifest::Kind;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/shelf.js");

/// One successfully-processed entry, ready for rendering.
#[derive(Debug, Clone)]
pub struct ShelfItem {
    pub title: String,
    pub kind: Kind,
    pub tags: Vec<String>,
    pub read: bool,
    pub thumb_src: String,
    pub href: String,
}

/// Ordered-unique tag and kind indexes, built incrementally while the
/// pipeline iterates processed entries.
#[derive(Debug, Default)]
pub struct Indexes {
    /// Sorted alphabetically by [`Indexes::finish`] for display.
    pub tags: Vec<String>,
    /// First-seen order, preserved through rendering.
    pub kinds: Vec<Kind>,
}

impl Indexes {
    pub fn observe(&mut self, item: &ShelfItem) {
        if !self.kinds.contains(&item.kind) {
            self.kinds.push(item.kind);
        }
        for tag in &item.tags {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
    }

    /// Sort the tag index for display. Kind order stays first-seen.
    pub fn finish(&mut self) {
        self.tags.sort();
    }
}

/// Render the whole document.
pub fn render_page(items: &[ShelfItem], indexes: &Indexes) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "readshelf" }
                link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500&display=swap";
                style { (PreEscaped(CSS)) }
            }
            body {
                (view_controls())
                (filter_bars(indexes))
                div #shelf .shelf {
                    @for (idx, item) in items.iter().enumerate() {
                        (card(idx, item))
                    }
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// One gallery card. The anchor wraps the whole card; data attributes feed
/// the client-side filter/sort state machine.
fn card(idx: usize, item: &ShelfItem) -> Markup {
    // Vec<String> → JSON array cannot fail to serialize.
    let tags_json =
        serde_json::to_string(&item.tags).unwrap_or_else(|_| "[]".to_string());

    html! {
        a .book .read[item.read]
            data-idx=(idx)
            data-tags=(tags_json)
            data-kind=(item.kind)
            data-title=(item.title)
            data-tagstr=(item.tags.join(","))
            href=(item.href)
            target="_blank"
            rel="noopener"
        {
            div .thumb {
                img src=(item.thumb_src) alt=(item.title);
                span .badge .kind-badge { (item.kind) }
                @if item.read {
                    span .badge .read-badge { "read" }
                } @else {
                    span .badge .read-badge .unread { "unread" }
                }
            }
            p .book-title { (item.title) }
            div .chips {
                @for tag in &item.tags {
                    span .chip { (tag) }
                }
            }
        }
    }
}

/// View-mode toggle and grid-size slider, fixed in the corner.
fn view_controls() -> Markup {
    html! {
        div .zoom-corner {
            button #view-toggle title="toggle view" { "☰" }
            input #zoom type="range" min="100" max="320" value="160" step="10";
            span #zoom-label { "160" }
        }
    }
}

/// The read/kind/tag filter bars and the sort bar.
fn filter_bars(indexes: &Indexes) -> Markup {
    html! {
        div #read-bar .filter-bar {
            span .bar-label { "read" }
            button .read-btn .active data-read="all" { "all" }
            button .read-btn data-read="read" { "read" }
            button .read-btn data-read="unread" { "unread" }
        }
        div #kind-bar .filter-bar {
            span .bar-label { "type" }
            button .kind-btn .active data-kind="all" { "all" }
            @for kind in &indexes.kinds {
                button .kind-btn data-kind=(kind) { (kind) }
            }
        }
        div #tag-bar .filter-bar {
            span .bar-label { "tags" }
            @for tag in &indexes.tags {
                button .tag-btn data-tag=(tag) { (tag) }
            }
            button #clear-tags { "clear" }
        }
        div #sort-bar .filter-bar {
            span .bar-label { "sort" }
            button .sort-btn .active data-sort="default" { "default" }
            button .sort-btn data-sort="name" { "name" }
            button .sort-btn data-sort="tags" { "tags" }
        }
    }
}
