//! Chapter dashboard screen
//!
//! Language toggle, season and tier switchers, a context bar and the chapter
//! card grid for the selected season, tier and language.

use axum::extract::{Query, State};
use axum::response::Html;
use explore_common::resolver::ChapterCard;
use explore_common::{Language, Selection, SelectionQuery, SelectionUpdate, View};

use super::{escape, layout, tier_style, tr};
use crate::AppState;

/// GET /explore?season=&tier=&lang=
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Html<String> {
    let selection = Selection::from_query(View::Dashboard, None, &query);
    let resolver = &state.resolver;
    let language = selection.language;
    let tier = resolver.tier(selection.tier);

    let language_toggle: String = Language::ALL
        .into_iter()
        .map(|lang| {
            format!(
                r#"<a class="lang-option{active}" href="{href}" hreflang="{code}">{label}</a>"#,
                active = if lang == language { " active" } else { "" },
                href = escape(&selection.with(SelectionUpdate::SetLanguage(lang)).href()),
                code = lang.code(),
                label = lang.code().to_uppercase(),
            )
        })
        .collect();

    let season_switcher: String = resolver
        .catalog()
        .seasons()
        .iter()
        .map(|season| {
            format!(
                r#"<a class="season-option{active}" href="{href}">{title}</a>"#,
                active = if season.id == selection.season { " active" } else { "" },
                href = escape(&selection.with(SelectionUpdate::SelectSeason(season.id)).href()),
                title = escape(language.pick(&season.title)),
            )
        })
        .collect();

    let tier_switcher: String = resolver
        .catalog()
        .tiers()
        .iter()
        .map(|t| {
            let active = t.id == selection.tier;
            format!(
                r#"<a class="tier-option{active_class}" href="{href}" aria-pressed="{active}"><span>{label}</span> <span class="grades">({grades})</span></a>"#,
                active_class = if active { " active" } else { "" },
                href = escape(&selection.with(SelectionUpdate::SelectTier(t.id)).href()),
                label = escape(&t.label),
                grades = escape(&t.grades),
            )
        })
        .collect();

    let cards = resolver.chapter_cards(selection.season, selection.tier, language);
    let grid = if cards.is_empty() {
        format!(
            r#"<p class="empty-season">{}</p>"#,
            tr(
                language,
                "No chapters in this season yet.",
                "Aún no hay capítulos en esta temporada.",
            )
        )
    } else {
        let items: String = cards
            .iter()
            .map(|card| chapter_card(card, &selection, resolver.fallback_image_url()))
            .collect();
        format!(r#"<div class="chapter-grid">{}</div>"#, items)
    };

    let footer = if cards.is_empty() {
        String::new()
    } else {
        let text = match language {
            Language::En => format!(
                "Showing all {} chapters for {} (Grades {})",
                cards.len(),
                tier.label,
                tier.grades
            ),
            Language::Es => format!(
                "Mostrando los {} capítulos para {} (Grados {})",
                cards.len(),
                tier.label,
                tier.grades
            ),
        };
        format!(r#"<p class="grid-footer">{}</p>"#, escape(&text))
    };

    let body = format!(
        r#"<header class="dashboard-header">
    <div class="header-row">
        <div class="brand-row">
            <a class="back-button" href="{back}" aria-label="Back to Gateway">&larr;</a>
            <div>
                <p class="eyebrow">Startup Smartup</p>
                <h1>Project <span class="tier-accent">Explore</span></h1>
            </div>
        </div>
        <nav class="lang-toggle" aria-label="{toggle_label}">{language_toggle}</nav>
    </div>
    <nav class="season-switcher">{season_switcher}</nav>
    <nav class="tier-switcher">{tier_switcher}</nav>
    <div class="context-bar">
        <span class="context-language">{language_name}</span>
        <span class="separator">&bull;</span>
        <span class="tier-dot"></span>
        <p>{tier_description}</p>
    </div>
</header>
<main class="dashboard">
    {grid}
    {footer}
</main>"#,
        back = escape(&selection.with(SelectionUpdate::Back).href()),
        toggle_label = tr(language, "Switch to Spanish", "Cambiar a Inglés"),
        language_name = language.native_name(),
        tier_description = escape(&tier.description),
    );

    Html(layout(
        "Project Explore",
        language,
        "dashboard-page",
        &tier_style(tier),
        &body,
    ))
}

fn chapter_card(card: &ChapterCard, selection: &Selection, fallback_image: &str) -> String {
    let language = selection.language;
    let title = escape(&card.title);

    let worksheet = if card.has_activity {
        format!(
            r#"<a class="worksheet-button" href="{}" aria-label="{}">&#128196;</a>"#,
            escape(&selection.with(SelectionUpdate::OpenActivity(card.id)).href()),
            tr(language, "View worksheet", "Ver hoja de trabajo"),
        )
    } else {
        String::new()
    };

    // Play and mark-complete are display-only
    format!(
        r#"<article class="chapter-card">
        <div class="thumbnail">
            <img src="{thumbnail}" alt="{title}" loading="lazy" onerror="this.onerror=null;this.src='{fallback}';">
            <span class="chapter-badge">{badge} {id}</span>
            <span class="duration">{duration}</span>
        </div>
        <div class="card-body">
            <h3>{title}</h3>
            <div class="card-actions">
                <button type="button" class="play-button" aria-label="{play} {title}">&#9654; {play}</button>
                {worksheet}
                <button type="button" class="complete-button" aria-label="{complete}">&#10003;</button>
            </div>
        </div>
    </article>"#,
        thumbnail = escape(&card.thumbnail_url),
        fallback = escape(fallback_image),
        badge = tr(language, "CH", "CAP"),
        id = card.id,
        duration = escape(&card.duration),
        play = tr(language, "Play", "Ver"),
        complete = tr(language, "Mark complete", "Marcar completado"),
    )
}
