// HTML rendering of the forecast view (day cards)
use crate::presentation::view::{DayCard, ForecastView, LoadStatus};
use html_escape::encode_text;
use std::fmt::Write;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem;background:#f4f6f4}\
#days{display:flex;flex-wrap:wrap;gap:1rem}\
.day{background:#fff;border-radius:8px;padding:1rem;min-width:12rem;border-left:6px solid #b0b0b0}\
.day.good{border-left-color:#2e8b57}.day.bad{border-left-color:#c0392b}\
.status.error,.status.config_error{color:#c0392b}";

pub fn render_page(view: &ForecastView, location: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Hiking forecast - {loc}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>Hiking forecast for {loc}</h1>\n<p id=\"status\" class=\"status {status}\">{message}</p>\n",
        loc = encode_text(location),
        status = status_class(view.status),
        message = encode_text(&view.message),
    );

    // the card container only exists when there is something to show
    if !view.days.is_empty() {
        html.push_str("<div id=\"days\">\n");
        for card in &view.days {
            render_card(&mut html, card);
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_card(html: &mut String, card: &DayCard) {
    let feels_like = card
        .feels_like_f
        .map(|f| format!("{:.1}°F", f))
        .unwrap_or_else(|| "n/a".to_string());

    let _ = write!(
        html,
        "<div class=\"day {class}\">\n<h2>{date}</h2>\n<p class=\"verdict\">{headline}</p>\n\
         <p>Feels like: {feels_like}</p>\n<p>Wind: {wind:.1} mph</p>\n\
         <p>Clouds: {clouds:.0}% ({sky})</p>\n<ul class=\"reasons\">\n",
        class = if card.overall { "good" } else { "bad" },
        date = encode_text(&card.date_label),
        headline = card.headline,
        wind = card.wind_mph,
        clouds = card.clouds,
        sky = encode_text(&card.sky_description),
    );
    for reason in card.reasons {
        let _ = writeln!(html, "<li>{}</li>", reason);
    }
    html.push_str("</ul>\n</div>\n");
}

fn status_class(status: LoadStatus) -> &'static str {
    match status {
        LoadStatus::Ok => "ok",
        LoadStatus::NoData => "no_data",
        LoadStatus::ConfigError => "config_error",
        LoadStatus::Error => "error",
    }
}
