use crate::{AppState, Effect, Flow, Msg, RequestToken, SearchFailure};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.is_unmounted() && !matches!(msg, Msg::Tick | Msg::NoOp) {
        // Nothing may write into a view that is gone, including late results.
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Mounted => {
            if state.mount() {
                // First appearance loads the default news topic.
                start_article_search(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::Unmounted => state
            .unmount()
            .into_iter()
            .map(|token| Effect::CancelSearch { token })
            .collect(),
        Msg::VideoQueryChanged(text) => {
            state.set_video_text(text);
            Vec::new()
        }
        Msg::ArticleQueryChanged(text) => {
            state.set_article_text(text);
            Vec::new()
        }
        Msg::VideoSearchClicked => {
            let query = state.video_query().text().to_string();
            if query.trim().is_empty() {
                // Rejected locally; a request already running is left alone.
                state.reject_video_query(SearchFailure::EmptyQuery.message(Flow::Video));
                return (state, Vec::new());
            }
            let (token, superseded) = state.begin_video_search();
            with_cancel(superseded, Effect::SearchVideos { token, query })
        }
        Msg::ArticleSearchClicked => start_article_search(&mut state),
        Msg::VideoSearchFinished { token, result } => {
            let outcome = result.map_err(|failure| failure.message(Flow::Video));
            state.finish_video_search(token, outcome);
            Vec::new()
        }
        Msg::ArticleSearchFinished { token, result } => {
            let outcome = result.map_err(|failure| failure.message(Flow::Article));
            state.finish_article_search(token, outcome);
            Vec::new()
        }
        Msg::ReadMoreClicked { title } => vec![Effect::OpenExternalSearch { title }],
        Msg::OpenLinkClicked { url } => vec![Effect::OpenUrl { url }],
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_article_search(state: &mut AppState) -> Vec<Effect> {
    let query = state.article_query().text().trim().to_string();
    let (token, superseded) = state.begin_article_search();
    with_cancel(superseded, Effect::SearchArticles { token, query })
}

fn with_cancel(superseded: Option<RequestToken>, effect: Effect) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(2);
    if let Some(token) = superseded {
        effects.push(Effect::CancelSearch { token });
    }
    effects.push(effect);
    effects
}
