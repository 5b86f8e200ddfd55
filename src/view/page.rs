//! Standalone HTML page around the results and modal regions.

use super::ids;
use super::node::{el, Element, Node};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#f3f4f6;margin:0;padding:2rem}\
.container{max-width:56rem;margin:0 auto}\
.hidden{display:none}\
.panel{background:#fff;border-radius:.5rem;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:1.5rem;margin-bottom:1.5rem}\
.stat-grid{display:grid;grid-template-columns:1fr 1fr;gap:1rem}\
.stat-label{color:#6b7280;font-size:.875rem;margin:0}\
.stat-value{font-weight:600;margin:0}\
.player-card{border:1px solid #e5e7eb;border-radius:.5rem;padding:.75rem;margin-bottom:.5rem}\
.player-card[data-player-id]{cursor:pointer}\
.captain-badge,.vice-captain-badge{margin-left:.5rem;font-size:.75rem;padding:.125rem .5rem;border-radius:9999px}\
.captain-badge{background:#fef3c7}\
.vice-captain-badge{background:#e5e7eb}\
.transfer-pair{display:flex;align-items:center;gap:1rem}\
.transfer-out{background:#fef2f2;flex:1}\
.transfer-in{background:#f0fdf4;flex:1}\
.delta-positive{color:#16a34a}\
.delta-negative{color:#dc2626}\
.differential-note{color:#2563eb}\
.considerations{background:#fefce8;border-left:4px solid #facc15;padding:1rem;display:flex;gap:.75rem}\
.error-banner{background:#fee2e2;color:#991b1b;padding:1rem;border-radius:.5rem}\
.modal{position:fixed;inset:0;background:rgba(0,0,0,.5);display:flex;align-items:center;justify-content:center}\
.modal.hidden{display:none}\
.modal-content{background:#fff;border-radius:.5rem;padding:1.5rem;max-width:32rem;width:100%}\
.modal-stats{display:grid;grid-template-columns:1fr 1fr;gap:.75rem}\
.performance-chart{width:100%;height:auto}";

/// Region state needed to draw the page.
#[derive(Debug, Clone, Copy)]
pub struct PageParts<'a> {
    pub team_id: &'a str,
    pub analyze_disabled: bool,
    pub loading_hidden: bool,
    pub error: Option<&'a str>,
    pub results_hidden: bool,
    pub results: Option<&'a Node>,
    pub modal_hidden: bool,
    pub modal_content: Option<&'a Node>,
}

fn form(parts: &PageParts<'_>) -> Element {
    let button = el("button")
        .id(ids::ANALYZE_BUTTON)
        .attr("type", "submit")
        .text("Analyze Team");
    let button = if parts.analyze_disabled {
        button.attr("disabled", "disabled")
    } else {
        button
    };

    el("form")
        .id(ids::ANALYSIS_FORM)
        .class("panel")
        .child(el("label").attr("for", ids::TEAM_ID).text("FPL Team ID"))
        .child(
            el("input")
                .id(ids::TEAM_ID)
                .attr("name", "team_id")
                .attr("type", "number")
                .attr("min", "1")
                .attr("value", parts.team_id),
        )
        .child(button)
}

/// Render a complete document with the fixed region ids.
///
/// The page is a snapshot of controller state. Its form carries no
/// `action`, since the server only accepts JSON bodies.
pub fn document(parts: &PageParts<'_>) -> String {
    let loading = el("div")
        .id(ids::LOADING)
        .class("loading")
        .class_if(parts.loading_hidden, "hidden")
        .text("Analyzing team…");

    let error = el("div")
        .id(ids::ERROR_MESSAGE)
        .class("error-banner")
        .class_if(parts.error.is_none(), "hidden")
        .child(el("p").text(parts.error.unwrap_or_default()));

    let results = el("div")
        .id(ids::RESULTS)
        .class_if(parts.results_hidden, "hidden")
        .opt_child(parts.results.cloned());

    let modal = el("div")
        .id(ids::PLAYER_MODAL)
        .class("modal")
        .class_if(parts.modal_hidden, "hidden")
        .child(
            el("div")
                .id(ids::MODAL_CONTENT)
                .class("modal-content")
                .opt_child(parts.modal_content.cloned()),
        );

    let html = el("html")
        .attr("lang", "en")
        .child(
            el("head")
                .child(el("meta").attr("charset", "utf-8"))
                .child(el("title").text("FPL Team Analyzer"))
                .child(el("style").text(STYLE)),
        )
        .child(
            el("body").child(
                el("main")
                    .class("container")
                    .child(el("h1").text("FPL Team Analyzer"))
                    .child(form(parts))
                    .child(loading)
                    .child(error)
                    .child(results)
                    .child(modal),
            ),
        );

    format!("<!DOCTYPE html>\n{html}\n")
}
