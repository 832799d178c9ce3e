use chrono::{Datelike, NaiveDate, Utc};

use crate::models::poll_models::{Poll, PollTemplate};

/// One template per weekday slot. Order matters: past poll ids stay stable
/// only while this list keeps its order.
const POLL_TEMPLATES: [PollTemplate; 7] = [
    PollTemplate {
        id: "coffee-tea",
        question: "What's your preference?",
        option_a: "Coffee ☕",
        option_b: "Tea 🍵",
        category: Some("lifestyle"),
    },
    PollTemplate {
        id: "ios-android",
        question: "Which mobile OS do you prefer?",
        option_a: "iOS 🍎",
        option_b: "Android 🤖",
        category: Some("tech"),
    },
    PollTemplate {
        id: "morning-night",
        question: "Are you a morning or night person?",
        option_a: "Morning 🌅",
        option_b: "Night 🌙",
        category: Some("lifestyle"),
    },
    PollTemplate {
        id: "remote-office",
        question: "Where do you prefer to work?",
        option_a: "Remote 🏠",
        option_b: "Office 🏢",
        category: Some("work"),
    },
    PollTemplate {
        id: "pizza-burger",
        question: "What's your favorite fast food?",
        option_a: "Pizza 🍕",
        option_b: "Burger 🍔",
        category: Some("food"),
    },
    PollTemplate {
        id: "dog-cat",
        question: "Dogs or cats?",
        option_a: "Dogs 🐕",
        option_b: "Cats 🐱",
        category: Some("pets"),
    },
    PollTemplate {
        id: "summer-winter",
        question: "Which season do you prefer?",
        option_a: "Summer ☀️",
        option_b: "Winter ❄️",
        category: Some("weather"),
    },
];

/// 0=Sunday..6=Saturday, reduced modulo the template count.
fn template_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize % POLL_TEMPLATES.len()
}

/// The poll shown on a given date. Pure function of (date, template list):
/// the same date always yields an equal Poll, so clients may cache by id.
pub fn poll_for_date(date: NaiveDate) -> Poll {
    let template = &POLL_TEMPLATES[template_index(date)];
    let date_str = date.format("%Y-%m-%d").to_string();

    Poll {
        id: format!("{}-{}", template.id, date_str),
        date: date_str,
        question: template.question.to_string(),
        option_a: template.option_a.to_string(),
        option_b: template.option_b.to_string(),
        category: template.category.map(str::to_string),
    }
}

/// Today's poll, stable for the whole UTC day.
pub fn today_poll() -> Poll {
    poll_for_date(Utc::now().date_naive())
}

/// Distinct category tags across all templates, first occurrence order.
pub fn categories() -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for template in &POLL_TEMPLATES {
        if let Some(category) = template.category {
            if !out.iter().any(|c| c == category) {
                out.push(category.to_string());
            }
        }
    }
    out
}
