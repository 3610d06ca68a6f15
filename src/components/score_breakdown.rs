use crate::components::score_badge::ScoreBadge;
use crate::models::rating::format_score;
use crate::models::stall::Stall;
use leptos::*;

/// Overall score plus the four rated dimensions of a stall.
#[component]
pub fn ScoreBreakdown(stall: Stall) -> impl IntoView {
    view! {
        <div class="score-breakdown" data-testid="score-breakdown">
            <div class="score-overall">
                <ScoreBadge score=stall.overall_score test_id="overall-score" />
                <span class="score-out-of">"/5.0"</span>
            </div>
            <ul class="score-dimensions">
                {stall
                    .dimensions()
                    .into_iter()
                    .map(|(label, score)| {
                        view! {
                            <li>
                                <span class="dimension-label">{label}</span>
                                <span class="dimension-score">{format_score(score)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="score-basis">{format!("Based on {} ratings", stall.rating_count)}</p>
        </div>
    }
}
