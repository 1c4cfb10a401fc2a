// Presentation layer - the day-card UI served over HTTP
pub mod app_state;
pub mod handlers;
pub mod html;
pub mod view;
