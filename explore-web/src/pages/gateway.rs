//! Gateway (landing) screen
//!
//! Three platform panels; the focused one expands to show its description,
//! features and an entry button. Only open platforms can be entered.

use axum::extract::{Query, State};
use axum::response::Html;
use explore_common::catalog::Platform;
use explore_common::{Selection, SelectionQuery, SelectionUpdate, View};

use super::{escape, layout};
use crate::AppState;

/// GET /?platform=
pub async fn gateway_page(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Html<String> {
    let selection = Selection::from_query(View::Gateway, None, &query);

    let panels: String = state
        .resolver
        .platforms()
        .iter()
        .map(|platform| platform_panel(platform, &selection))
        .collect();

    let body = format!(
        r#"<div class="gateway">
    <div class="brand">
        <h1>Startup Smartup</h1>
        <p>The K-12 Innovation Pathway</p>
    </div>
{panels}
</div>"#
    );

    Html(layout(
        "Startup Smartup",
        selection.language,
        "gateway-page",
        "",
        &body,
    ))
}

fn platform_panel(platform: &Platform, selection: &Selection) -> String {
    let focused = selection.platform == platform.id;
    let focus_href = selection
        .with(SelectionUpdate::FocusPlatform(platform.id))
        .href();

    let details = if focused {
        let features: String = platform
            .features
            .iter()
            .map(|f| format!(r#"<li class="feature">&#10003; {}</li>"#, escape(f)))
            .collect();

        let entry = if platform.open {
            let enter_href = selection.with(SelectionUpdate::EnterPlatform).href();
            format!(
                r#"<a class="enter-button" href="{}">Enter Platform &rarr;</a>"#,
                escape(&enter_href)
            )
        } else {
            r#"<span class="enter-button disabled" aria-disabled="true">&#128274; Coming Soon</span>"#
                .to_string()
        };

        format!(
            r#"
            <div class="platform-details">
                <p class="platform-description">{description}</p>
                <ul class="features">{features}</ul>
                {entry}
            </div>"#,
            description = escape(&platform.description),
        )
    } else {
        String::new()
    };

    format!(
        r#"    <section class="platform {state}" style="--platform-accent: {accent};" aria-expanded="{focused}">
        <img class="platform-image" src="{image}" alt="{title}">
        <div class="platform-content">
            <a class="platform-focus" href="{focus_href}" aria-label="{title} - {grade}">
                <span class="grade-tag">{grade}</span>
                <h2>{title}</h2>
                <h3>{tagline}</h3>
            </a>{details}
        </div>
    </section>
"#,
        state = if focused { "active" } else { "collapsed" },
        accent = escape(&platform.accent),
        image = escape(&platform.image),
        title = escape(&platform.title),
        grade = escape(&platform.grade),
        tagline = escape(&platform.tagline),
        focus_href = escape(&focus_href),
    )
}
