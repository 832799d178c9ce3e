pub mod get_categories;
pub mod get_poll_by_date;
pub mod get_today_poll;
pub mod models;
