//! Server-rendered public browse page.

use aicatch_types::{category_options, BrowseFilter, ThemeMode, Tool, ALL_CATEGORIES};
use axum::extract::{Query, State};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Deserialize;

use crate::error::ApiError;
use crate::router::AppState;

/// Query string of `GET /`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct BrowseParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    category: Option<String>,
}

impl From<BrowseParams> for BrowseFilter {
    fn from(params: BrowseParams) -> Self {
        let category = params
            .category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());
        BrowseFilter::new(params.q, category)
    }
}

/// `GET /?q=&category=`
pub(crate) async fn browse_page(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> Result<Markup, ApiError> {
    let tools = state
        .repo
        .list()
        .await
        .map_err(|e| ApiError::store("Error listing tools", e))?;
    Ok(render_browse(&tools, &params.into(), state.theme))
}

struct Palette {
    primary: &'static str,
    secondary: &'static str,
    background: &'static str,
    paper: &'static str,
    text: &'static str,
    text_secondary: &'static str,
}

const LIGHT: Palette = Palette {
    primary: "#673ab7",
    secondary: "#ff9800",
    background: "#ffffff",
    paper: "#ffffff",
    text: "#333",
    text_secondary: "#555",
};

const DARK: Palette = Palette {
    primary: "#ba68c8",
    secondary: "#ffa726",
    background: "#121212",
    paper: "#1e1e1e",
    text: "#eee",
    text_secondary: "#aaa",
};

const BASE_CSS: &str = "
body { margin: 0; font-family: Roboto, Arial, sans-serif; background: var(--background); color: var(--text); }
.container { max-width: 1200px; margin: 32px auto; padding: 0 16px; }
header { text-align: center; margin-bottom: 32px; }
header h1 { font-weight: bold; margin-bottom: 8px; }
.subtitle { color: var(--text-secondary); }
.filters { display: flex; gap: 16px; margin-bottom: 16px; flex-wrap: wrap; }
.filters input, .filters select { flex: 1; min-width: 200px; padding: 12px; }
.filters button { padding: 12px 24px; background: var(--primary); color: #fff; border: 0; border-radius: 4px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px; }
.card { display: flex; flex-direction: column; justify-content: space-between; padding: 16px; background: var(--paper); border-radius: 4px; box-shadow: 0px 4px 10px rgba(0, 0, 0, 0.1); }
.card h2 { font-size: 1.25rem; margin: 0; }
.chip { align-self: flex-start; margin: 8px 0; padding: 2px 10px; border-radius: 16px; background: var(--secondary); color: #000; font-size: 0.8rem; }
.description { color: var(--text-secondary); height: 80px; overflow: hidden; }
.visit { display: block; text-align: center; padding: 8px; background: var(--primary); color: #fff; text-decoration: none; border-radius: 4px; }
.visit.disabled { opacity: 0.5; }
.empty { text-align: center; color: var(--text-secondary); }
";

fn palette_vars(p: &Palette) -> String {
    format!(
        ":root {{ --primary: {}; --secondary: {}; --background: {}; --paper: {}; --text: {}; --text-secondary: {}; }}",
        p.primary, p.secondary, p.background, p.paper, p.text, p.text_secondary
    )
}

/// Builds the stylesheet for the requested theme.
fn stylesheet(theme: ThemeMode) -> String {
    let vars = match theme {
        ThemeMode::Light => palette_vars(&LIGHT),
        ThemeMode::Dark => palette_vars(&DARK),
        ThemeMode::Auto => format!(
            "{}\n@media (prefers-color-scheme: dark) {{ {} }}",
            palette_vars(&LIGHT),
            palette_vars(&DARK)
        ),
    };
    format!("{vars}\n{BASE_CSS}")
}

/// Only http(s) links become clickable.
fn safe_href(link: &str) -> Option<&str> {
    let lower = link.trim_start().to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")).then_some(link)
}

/// Renders the catalog with `filter` applied.
pub(crate) fn render_browse(tools: &[Tool], filter: &BrowseFilter, theme: ThemeMode) -> Markup {
    let categories = category_options(tools);
    let visible = filter.apply(tools);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "AICatch - Discover AI Tools" }
                style { (PreEscaped(stylesheet(theme))) }
            }
            body {
                main.container {
                    header {
                        h1 { "🔍 AICatch - Discover AI Tools" }
                        p.subtitle { "Explore the best AI tools for various categories." }
                    }
                    form.filters method="get" action="/" {
                        input type="search" name="q" placeholder="Search AI Tools" value=(filter.search);
                        select name="category" {
                            @for category in &categories {
                                option value=(category) selected[*category == filter.category] { (category) }
                            }
                        }
                        button type="submit" { "Filter" }
                    }
                    @if visible.is_empty() {
                        p.empty { "No tools match your search." }
                    } @else {
                        section.grid {
                            @for tool in &visible {
                                article.card {
                                    div {
                                        h2 { (tool.name) }
                                        span.chip { (tool.category) }
                                        p.description { (tool.description) }
                                    }
                                    @if let Some(href) = safe_href(&tool.link) {
                                        a.visit href=(href) target="_blank" rel="noopener noreferrer" { "Visit" }
                                    } @else {
                                        span.visit.disabled title=(tool.link) { "Visit" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
