use leptos::prelude::*;

use crate::models::{StatCard, StatIcon};

fn glyph(icon: StatIcon) -> &'static str {
    match icon {
        StatIcon::Lists => "☰",
        StatIcon::Tasks => "✔",
        StatIcon::Pending => "⏳",
        StatIcon::Completed => "★",
    }
}

fn modifier(icon: StatIcon) -> &'static str {
    match icon {
        StatIcon::Lists => "stat-tile stat-tile--lists",
        StatIcon::Tasks => "stat-tile stat-tile--tasks",
        StatIcon::Pending => "stat-tile stat-tile--pending",
        StatIcon::Completed => "stat-tile stat-tile--completed",
    }
}

#[component]
pub fn StatTile(card: StatCard) -> impl IntoView {
    view! {
        <div class=modifier(card.icon)>
            <div class="stat-tile-header">
                <span class="stat-tile-title">{card.title}</span>
                <span class="stat-tile-icon" aria-hidden="true">{glyph(card.icon)}</span>
            </div>
            <div class="stat-tile-value">{card.value}</div>
            <p class="stat-tile-caption">{card.caption}</p>
        </div>
    }
}
