use std::fmt::Write;

use hub_core::{AppViewModel, QueryView};

const RULE: &str = "------------------------------------------------------------";

/// Pure rendering of the view model into the text shown on the terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Financial Education Hub");
    let _ = writeln!(out, "{RULE}");

    section_header(&mut out, "Videos", &view.video, "Search financial videos...");
    status_lines(&mut out, &view.video, "Loading videos...");
    for (i, video) in view.videos.iter().enumerate() {
        let _ = writeln!(out, "  [v{}] {}", i + 1, video.title);
    }

    let _ = writeln!(out);
    section_header(&mut out, "Market News", &view.article, "Search finance news...");
    status_lines(&mut out, &view.article, "Loading news...");
    if view.articles.is_empty() && !view.article.loading && view.article.error.is_none() {
        let _ = writeln!(out, "  (no articles yet)");
    }
    for (i, article) in view.articles.iter().enumerate() {
        let _ = writeln!(out, "  [a{}] {}", i + 1, article.title);
        let _ = writeln!(out, "       {}", article.description);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Financial Blogs");
    for (i, blog) in view.blogs.iter().enumerate() {
        let _ = writeln!(out, "  [b{}] {}", i + 1, blog.title);
        let _ = writeln!(out, "       {}", blog.description);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Trending Financial News");
    for (i, news) in view.trending.iter().enumerate() {
        let _ = writeln!(out, "  [n{}] {}", i + 1, news.title);
        let _ = writeln!(out, "       {}", news.summary);
    }
    let _ = writeln!(out, "{RULE}");
    out
}

fn section_header(out: &mut String, title: &str, query: &QueryView, placeholder: &str) {
    let shown = if query.text.is_empty() {
        placeholder
    } else {
        query.text.as_str()
    };
    let _ = writeln!(out, "{title}  [ {shown} ]");
}

fn status_lines(out: &mut String, query: &QueryView, loading_text: &str) {
    if query.loading {
        let _ = writeln!(out, "  {loading_text}");
    }
    if let Some(error) = &query.error {
        let _ = writeln!(out, "  ! {error}");
    }
}
