//! Line commands typed into the terminal front end.

use hub_core::{video_watch_url, AppViewModel, Msg};

pub const USAGE: &str = "\
Commands:
  v <query>            search finance videos
  a [query]            search news (empty query loads the default topic)
  open v|a|b|n <n>     watch video / open article / read more on blog / open trending news
  help                 show this help
  q                    quit";

/// List a link command points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Videos,
    Articles,
    Blogs,
    Trending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Messages(Vec<Msg>),
    /// One-based index into a rendered list.
    Open { section: Section, index: usize },
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "" => Command::Messages(Vec::new()),
        "v" | "video" | "videos" => Command::Messages(vec![
            Msg::VideoQueryChanged(rest.to_string()),
            Msg::VideoSearchClicked,
        ]),
        "a" | "news" | "articles" => Command::Messages(vec![
            Msg::ArticleQueryChanged(rest.to_string()),
            Msg::ArticleSearchClicked,
        ]),
        "open" | "o" => parse_open(rest),
        "help" | "h" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("Unknown command '{other}'. Type 'help'.")),
    }
}

fn parse_open(args: &str) -> Command {
    let mut parts = args.split_whitespace();
    let section = match parts.next().map(str::to_ascii_lowercase).as_deref() {
        Some("v") => Section::Videos,
        Some("a") => Section::Articles,
        Some("b") => Section::Blogs,
        Some("n") => Section::Trending,
        _ => return Command::Invalid("Usage: open v|a|b|n <number>".to_string()),
    };
    match parts.next().map(str::parse::<usize>) {
        Some(Ok(index)) if index > 0 && parts.next().is_none() => Command::Open { section, index },
        _ => Command::Invalid("Usage: open v|a|b|n <number>".to_string()),
    }
}

/// Resolves a link command against what is currently on screen.
pub fn resolve_open(view: &AppViewModel, section: Section, index: usize) -> Result<Msg, String> {
    let slot = index.checked_sub(1);
    let missing = || format!("No entry #{index} in that list.");
    match section {
        Section::Videos => slot
            .and_then(|i| view.videos.get(i))
            .map(|video| Msg::OpenLinkClicked {
                url: video_watch_url(&video.video_id),
            })
            .ok_or_else(missing),
        Section::Articles => slot
            .and_then(|i| view.articles.get(i))
            .map(|article| Msg::OpenLinkClicked {
                url: article.url.clone(),
            })
            .ok_or_else(missing),
        Section::Blogs => slot
            .and_then(|i| view.blogs.get(i))
            .map(|blog| Msg::ReadMoreClicked {
                title: blog.title.to_string(),
            })
            .ok_or_else(missing),
        Section::Trending => slot
            .and_then(|i| view.trending.get(i))
            .map(|news| Msg::OpenLinkClicked {
                url: news.url.to_string(),
            })
            .ok_or_else(missing),
    }
}
