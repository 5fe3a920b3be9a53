//! Page baking
//!
//! The site's list content is rendered ahead of serving: each page skeleton
//! carries its container and reveal sections, the presentation renderers
//! fill the containers from the static catalog, and the result is written
//! into the public directory the server serves from. Baked pages are
//! derived artifacts; re-baking overwrites them.

use std::fs;
use std::path::{Path, PathBuf};

use scriptforge_core::page::Element;
use scriptforge_core::prelude::*;
use scriptforge_core::render::{self, CARDS_CLASS, HOME_CONTAINER_ID, LIST_CLASS};
use scriptforge_core::reveal::REVEAL_CLASS;

pub const HOME_PAGE: &str = "index.html";
pub const COMMUNITY_PAGE: &str = "unity-community.html";
pub const CSHARP_PAGE: &str = "unity-csharp.html";

const PAGE_FILES: &[&str] = &[HOME_PAGE, COMMUNITY_PAGE, CSHARP_PAGE];

/// Whether any of the baked pages is absent from `public_dir`
pub fn pages_missing(public_dir: &Path) -> bool {
    PAGE_FILES.iter().any(|file| !public_dir.join(file).exists())
}

/// Render all site pages into `public_dir`, returning the paths written
pub fn bake_pages(public_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(public_dir)?;
    let mut written = Vec::new();
    for (file, document) in [
        (HOME_PAGE, home_document()),
        (COMMUNITY_PAGE, community_document()),
        (CSHARP_PAGE, csharp_document()),
    ] {
        let path = public_dir.join(file);
        fs::write(&path, render_document(&document))?;
        debug!("baked {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn render_document(document: &Element) -> String {
    format!("<!DOCTYPE html>\n{}\n", document.to_html())
}

fn document(title: &str, main: Element) -> Element {
    Element::new("html")
        .attr("lang", "en")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(Element::new("title").text(title))
                .child(
                    Element::new("link")
                        .attr("rel", "stylesheet")
                        .attr("href", "styles.css"),
                ),
        )
        .child(Element::new("body").child(main))
}

fn home_document() -> Element {
    let main = Element::new("main").child(
        Element::new("section")
            .id("featured")
            .class(REVEAL_CLASS)
            .child(Element::new("h2").text("Featured tutorials"))
            .child(Element::new("div").id(HOME_CONTAINER_ID).class("grid")),
    );
    let mut doc = document("Game Scripting Tutorials", main);
    render::render_featured(&mut doc);
    doc
}

fn community_document() -> Element {
    let main = Element::new("main").child(
        Element::new("section")
            .id("categories")
            .class(REVEAL_CLASS)
            .child(Element::new("h2").text("Unity Community"))
            .child(Element::new("div").class(CARDS_CLASS).attr("role", "list")),
    );
    let mut doc = document("Unity Community", main);
    render::render_categories(&mut doc);
    doc
}

fn csharp_document() -> Element {
    let main = Element::new("main").child(
        Element::new("section")
            .id("posts")
            .class(REVEAL_CLASS)
            .child(Element::new("h2").text("Unity C#"))
            .child(Element::new("div").class(LIST_CLASS)),
    );
    let mut doc = document("Unity C#", main);
    render::render_posts(&mut doc);
    doc
}
