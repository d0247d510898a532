//! Printable activity sheet
//!
//! Duration and budget selectors, an overview card and collapsible sections.
//! Extension ideas appear for the 45 minute variant only. A chapter without
//! an activity renders a 404 page with a way back to the dashboard.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use explore_common::{
    ActivityLookup, ActivityView, BudgetVariant, Panel, Selection, SelectionQuery,
    SelectionUpdate, TimeVariant, View,
};

use super::{escape, layout, tier_style};
use crate::AppState;

/// GET /explore/activity/:chapter_id?season=&tier=&lang=&time=&budget=&open=
pub async fn activity_page(
    State(state): State<AppState>,
    Path(raw_chapter): Path<String>,
    Query(query): Query<SelectionQuery>,
) -> Response {
    // Non-numeric ids are just another missing chapter
    let chapter_id = raw_chapter.parse::<u32>().ok();
    let selection = Selection::from_query(View::Activity, chapter_id, &query);
    let resolver = &state.resolver;
    let style = tier_style(resolver.tier(selection.tier));

    let Some(chapter_id) = chapter_id else {
        return not_found(&raw_chapter, &selection, &style);
    };

    let lookup = resolver.resolve_activity(
        chapter_id,
        selection.tier,
        selection.time,
        selection.budget,
    );
    match lookup {
        ActivityLookup::Found(view) => {
            let body = render_sheet(&view, &selection);
            let title = selection.language.pick(view.title);
            Html(layout(title, selection.language, "activity-page", &style, &body)).into_response()
        }
        ActivityLookup::NotFound { chapter_id } => {
            not_found(&chapter_id.to_string(), &selection, &style)
        }
    }
}

/// 404 page with a link back to the dashboard
fn not_found(chapter: &str, selection: &Selection, style: &str) -> Response {
    let body = format!(
        r#"<main class="not-found">
    <p>Activity not found for Chapter {chapter}</p>
    <a class="back-link" href="{back}">&larr; Back to Dashboard</a>
</main>"#,
        chapter = escape(chapter),
        back = escape(&selection.with(SelectionUpdate::Back).href()),
    );
    (
        StatusCode::NOT_FOUND,
        Html(layout(
            "Activity not found",
            selection.language,
            "activity-page",
            style,
            &body,
        )),
    )
        .into_response()
}

fn render_sheet(view: &ActivityView<'_>, selection: &Selection) -> String {
    let language = selection.language;
    let tier = view.tier.number();
    let grade_level = escape(&view.tier_differentiation.grade_level);
    let cost = escape(&view.budget_info.cost_per_student);
    let back = escape(&selection.with(SelectionUpdate::Back).href());

    let time_options: String = TimeVariant::ALL
        .into_iter()
        .map(|time| {
            format!(
                r#"<a class="option{active}" href="{href}">{minutes} min</a>"#,
                active = if time == view.time { " active" } else { "" },
                href = escape(&selection.with(SelectionUpdate::SelectTime(time)).href()),
                minutes = time.minutes(),
            )
        })
        .collect();

    let budget_options: String = BudgetVariant::ALL
        .into_iter()
        .map(|budget| {
            format!(
                r#"<a class="option{active}" href="{href}">{label}</a>"#,
                active = if budget == view.budget { " active" } else { "" },
                href = escape(&selection.with(SelectionUpdate::SelectBudget(budget)).href()),
                label = budget.short_label(),
            )
        })
        .collect();

    let materials = format!(
        r#"{list}
                <div class="budget-items">
                    <p>{label} ({cost}/student):</p>
                    <ul>{items}</ul>
                </div>"#,
        list = bullet_list(view.materials),
        label = escape(&view.budget_info.label),
        items = plain_items(&view.budget_info.items),
    );

    let steps: String = view
        .steps
        .iter()
        .enumerate()
        .map(|(idx, step)| {
            format!(
                r#"<li><span class="step-number">{n}</span><div><span class="step-title">{title}</span> <span class="step-duration">{duration}</span><p>{description}</p></div></li>"#,
                n = idx + 1,
                title = escape(&step.title),
                duration = escape(&step.duration),
                description = escape(&step.description),
            )
        })
        .collect();

    let questions: String = view
        .discussion_questions
        .iter()
        .enumerate()
        .map(|(idx, question)| {
            format!(
                r#"<li><span class="question-number">Q{}</span> <span>&ldquo;{}&rdquo;</span></li>"#,
                idx + 1,
                escape(question)
            )
        })
        .collect();

    let accommodations: String = view
        .accommodations
        .values()
        .map(|acc| {
            format!(
                r#"<div class="accommodation"><h4>{}</h4><ul>{}</ul></div>"#,
                escape(&acc.label),
                plain_items(&acc.strategies)
            )
        })
        .collect();

    let mut sections = vec![
        section(selection, Panel::Materials, "Materials Needed", &materials),
        section(
            selection,
            Panel::Steps,
            "Step-by-Step Instructions",
            &format!(r#"<ol class="steps">{}</ol>"#, steps),
        ),
        section(
            selection,
            Panel::Discussion,
            "Discussion Questions",
            &format!(r#"<ul class="questions">{}</ul>"#, questions),
        ),
        section(
            selection,
            Panel::TierAdaptations,
            &format!("Tier {} Adaptations ({})", tier, view.tier_differentiation.grade_level),
            &bullet_list(&view.tier_differentiation.focus),
        ),
        section(
            selection,
            Panel::Accommodations,
            "Accommodations & Differentiation",
            &accommodations,
        ),
    ];
    if let Some(ideas) = view.extension_ideas {
        sections.push(section(
            selection,
            Panel::ExtensionIdeas,
            "Extension Ideas",
            &bullet_list(ideas),
        ));
    }
    let sections = sections.join("\n");

    format!(
        r#"<header class="activity-header no-print">
    <div class="header-row">
        <div class="brand-row">
            <a class="back-button" href="{back}" aria-label="Back to Dashboard">&larr;</a>
            <div>
                <p class="eyebrow">Chapter {chapter_id} &bull; Tier {tier} ({grade_level})</p>
                <h1>{title}</h1>
            </div>
        </div>
        <button type="button" class="print-button" onclick="window.print()">&#128424; Print</button>
    </div>
</header>
<main class="activity">
    <div class="selectors no-print">
        <div class="selector">
            <span class="selector-label">Activity Duration</span>
            <div class="options">{time_options}</div>
            <p class="hint">{best_for}</p>
        </div>
        <div class="selector">
            <span class="selector-label">Budget Level</span>
            <div class="options">{budget_options}</div>
            <p class="hint">{cost}/student &bull; {budget_description}</p>
        </div>
    </div>
    <div class="print-header print-only">
        <h2>{title}</h2>
        <p>Chapter {chapter_id}: {chapter_title} &bull; Tier {tier} ({grade_level})</p>
        <p><strong>Duration:</strong> {minutes} minutes ({breakdown}) &bull; <strong>Budget:</strong> {budget_label} ({cost}/student)</p>
    </div>
    <section class="overview">
        <h2>{activity_name}</h2>
        <p class="breakdown">{breakdown}</p>
        <p>{description}</p>
    </section>
{sections}
    <div class="bottom-back no-print">
        <a class="back-link" href="{back}">&larr; Back to Dashboard</a>
    </div>
</main>"#,
        chapter_id = view.chapter_id,
        title = escape(language.pick(view.title)),
        chapter_title = escape(language.pick(view.chapter_title)),
        best_for = escape(view.best_for),
        budget_description = escape(&view.budget_info.description),
        minutes = view.time.minutes(),
        breakdown = escape(view.breakdown),
        budget_label = view.budget.print_label(),
        activity_name = escape(view.activity_name),
        description = escape(language.pick(view.description)),
    )
}

/// Collapsible section; the heading links to the same sheet with the panel toggled
fn section(selection: &Selection, panel: Panel, heading: &str, content: &str) -> String {
    let open = selection.panels.is_open(panel);
    let toggle_href = format!(
        "{}#{}",
        selection.with(SelectionUpdate::TogglePanel(panel)).href(),
        panel.key()
    );
    let content = if open {
        format!(r#"<div class="section-content">{}</div>"#, content)
    } else {
        // Collapsed sections still print
        format!(r#"<div class="section-content print-only">{}</div>"#, content)
    };

    format!(
        r#"    <section class="collapsible{state}" id="{key}">
        <a class="section-toggle" href="{href}" aria-expanded="{open}">
            <span>{heading}</span><span class="chevron">{chevron}</span>
        </a>
        {content}
    </section>"#,
        state = if open { " open" } else { "" },
        key = panel.key(),
        href = escape(&toggle_href),
        heading = escape(heading),
        chevron = if open { "&#9650;" } else { "&#9660;" },
    )
}

fn bullet_list(items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!(r#"<li><span class="bullet"></span>{}</li>"#, escape(item)))
        .collect();
    format!(r#"<ul class="bullets">{}</ul>"#, items)
}

fn plain_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}
