use dioxus::prelude::*;

use mathdash_core::model::GameSummary;

use crate::context::AppContext;
use crate::vm::format_datetime;

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let summaries = ctx.game_loop().recent_summaries(10);

    rsx! {
        div { class: "page history-page",
            h2 { "History" }

            if summaries.is_empty() {
                p { "No rounds played yet." }
            } else {
                ul { class: "history-list",
                    for (index, summary) in summaries.into_iter().enumerate() {
                        SummaryRow { key: "{index}", summary }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryRow(summary: GameSummary) -> Element {
    rsx! {
        li { class: "history-row",
            span { class: "history-date", "{format_datetime(summary.completed_at())}" }
            span { class: "history-game", "{summary.game_type().label()}" }
            span { class: "history-score",
                "Score: {summary.score()} in {summary.duration_secs()}s"
            }
        }
    }
}
