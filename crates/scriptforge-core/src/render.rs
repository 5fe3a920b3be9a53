//! Presentation renderers for the site pages
//!
//! Each renderer appends fragments built from the static catalog into its
//! target container. Renderers no-op when the container is absent from the
//! page, and re-invocation against an already-populated container is a
//! no-op (checked by child count), so they are safe to run on every page.

use crate::catalog::{self, CategoryCard, PostRow, TutorialCard};
use crate::page::Element;

/// Home page container id for the featured tutorials
pub const HOME_CONTAINER_ID: &str = "content-container";

/// Community page container class for the category cards
pub const CARDS_CLASS: &str = "cards";

/// C# page container class for the post rows
pub const LIST_CLASS: &str = "list";

/// Render the featured tutorial cards into `#content-container`
pub fn render_featured(document: &mut Element) {
    let Some(container) = document.find_id_mut(HOME_CONTAINER_ID) else {
        return;
    };
    if container.has_children() {
        return;
    }
    for item in catalog::FEATURED_TUTORIALS {
        container.append(tutorial_card(item));
    }
}

fn tutorial_card(item: &TutorialCard) -> Element {
    Element::new("div")
        .class("item")
        .child(Element::new("img").attr("src", item.image_url).attr("alt", item.title))
        .child(Element::new("h3").text(item.title))
        .child(Element::new("p").text(item.description))
        .child(Element::new("span").class("badge").text(item.category))
}

/// Render the category cards into the first `.cards` container
pub fn render_categories(document: &mut Element) {
    let Some(cards) = document.find_class_mut(CARDS_CLASS) else {
        return;
    };
    if cards.has_children() {
        return;
    }
    for category in catalog::UNITY_CATEGORIES {
        cards.append(category_card(category));
    }
}

fn category_card(category: &CategoryCard) -> Element {
    Element::new("a")
        .class("card")
        .attr("href", category.href)
        .attr("role", "listitem")
        .attr(
            "aria-label",
            format!("{} {}", category.title, category.count_text),
        )
        .child(Element::new("h4").text(category.title))
        .child(Element::new("p").class("muted").text(category.count_text))
}

/// Render the ranked post rows into the first `.list` container
pub fn render_posts(document: &mut Element) {
    let Some(list) = document.find_class_mut(LIST_CLASS) else {
        return;
    };
    if list.has_children() {
        return;
    }
    for post in catalog::CSHARP_POSTS {
        list.append(post_row(post));
    }
}

fn post_row(post: &PostRow) -> Element {
    let rank = Element::new("div")
        .class("rank")
        .child(Element::new("small").text("Top"))
        .child(Element::new("div").text(post.rank.to_string()));

    let content = Element::new("div")
        .class("content")
        .child(Element::new("h4").text(post.title))
        .child(Element::new("p").text(post.excerpt));

    Element::new("a")
        .class("row")
        .attr("href", post.href)
        .child(rank)
        .child(content)
        .child(stars(post.rating))
}

/// Build the five-span star rating, supporting halves
pub fn stars(rating: f64) -> Element {
    let mut wrap = Element::new("div")
        .class("stars")
        .attr("aria-label", format!("rating {rating} of 5"));
    for i in 1..=5 {
        let mut span = Element::new("span").class("star");
        let diff = rating - i as f64;
        if diff >= 0.0 {
            // full star, base styling applies
        } else if diff > -1.0 {
            // half star: gradient stop at the fractional percentage
            let pct = ((rating - (i - 1) as f64) * 100.0).round();
            span = span.style(format!(
                "background: linear-gradient(90deg, var(--star) {pct}%, var(--star-muted) {pct}%)"
            ));
        } else {
            span = span.class("mute");
        }
        wrap.append(span);
    }
    wrap
}
