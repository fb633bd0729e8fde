//! Metric cards rendering.
//!
//! One card per status with the number of records in it, or the headline
//! figures on the dashboard.

use crate::app::{App, Page};
use crate::records::columns::status_counts;
use crate::records::dashboard::DashboardStats;
use crate::records::format::Badge;
use crate::records::{InstallationStatus, ProductionStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Card {
    label: &'static str,
    value: usize,
    color: Color,
}

/// Whether a page shows metric cards.
pub fn has_metrics(page: Page) -> bool {
    matches!(page, Page::Dashboard | Page::Production | Page::Installations)
}

fn status_cards<S: Badge>(counts: &[(S, usize)]) -> Vec<Card> {
    counts
        .iter()
        .map(|(status, count)| Card {
            label: status.label(),
            value: *count,
            color: status.color(),
        })
        .collect()
}

fn dashboard_cards(stats: DashboardStats) -> Vec<Card> {
    vec![
        Card {
            label: "Clients actifs",
            value: stats.active_clients,
            color: Color::Green,
        },
        Card {
            label: "Soumissions en production",
            value: stats.accepted_submissions,
            color: Color::Blue,
        },
        Card {
            label: "Installations prévues",
            value: stats.upcoming_installations,
            color: Color::Yellow,
        },
        Card {
            label: "Commandes du mois",
            value: stats.monthly_orders,
            color: Color::Magenta,
        },
    ]
}

fn render_cards(cards: &[Card], area: Rect, buf: &mut Buffer) {
    if cards.is_empty() {
        return;
    }
    let areas = Layout::horizontal(vec![Constraint::Fill(1); cards.len()]).split(area);
    for (card, card_area) in cards.iter().zip(areas.iter()) {
        let style = Style::default().fg(card.color);
        let line = Line::from(vec![
            Span::styled(card.value.to_string(), style.add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(card.label, style),
        ]);
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        Widget::render(paragraph, *card_area, buf);
    }
}

/// Render the metric cards of the active page.
///
/// # Details
/// Counts cover every record of the page, regardless of the search text.
/// Pages without metrics draw nothing.
pub fn render_metrics(app: &App, area: Rect, buf: &mut Buffer) {
    let cards = match app.page {
        Page::Dashboard => dashboard_cards(DashboardStats::compute(&app.store, app.today)),
        Page::Production => status_cards(&status_counts(
            &app.store.productions,
            ProductionStatus::ALL,
            |p| p.status,
        )),
        Page::Installations => status_cards(&status_counts(
            &app.store.installations,
            InstallationStatus::ALL,
            |i| i.status,
        )),
        _ => Vec::new(),
    };
    render_cards(&cards, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_has_metrics() {
        assert!(has_metrics(Page::Production));
        assert!(has_metrics(Page::Installations));
        assert!(has_metrics(Page::Dashboard));
        assert!(!has_metrics(Page::Clients));
    }

    #[test]
    fn test_render_production_cards() {
        let app = App::new(Store::fixtures(), Page::Production).unwrap();
        let area = Rect::new(0, 0, 90, 3);
        let mut buf = Buffer::empty(area);
        render_metrics(&app, area, &mut buf);
        let text = buffer_text(&buf);
        for status in ProductionStatus::ALL {
            assert!(text.contains(status.label()));
        }
    }

    #[test]
    fn test_render_dashboard_cards() {
        let mut app = App::new(Store::fixtures(), Page::Dashboard).unwrap();
        app.today = chrono::NaiveDate::from_ymd_opt(2024, 4, 28).unwrap();
        let area = Rect::new(0, 0, 160, 3);
        let mut buf = Buffer::empty(area);
        render_metrics(&app, area, &mut buf);
        let text = buffer_text(&buf);
        for card in [
            "6 Clients actifs",
            "3 Soumissions en production",
            "2 Installations prévues",
            "5 Commandes du mois",
        ] {
            assert!(text.contains(card), "missing {card}");
        }
    }

    #[test]
    fn test_dashboard_cards_follow_store() {
        let mut app = App::new(Store::fixtures(), Page::Dashboard).unwrap();
        app.today = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        app.store.clients.truncate(2);
        let area = Rect::new(0, 0, 160, 3);
        let mut buf = Buffer::empty(area);
        render_metrics(&app, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("2 Clients actifs"));
        assert!(text.contains("0 Commandes du mois"));
    }

    #[test]
    fn test_clients_page_draws_nothing() {
        let app = App::new(Store::fixtures(), Page::Clients).unwrap();
        let area = Rect::new(0, 0, 90, 3);
        let mut buf = Buffer::empty(area);
        render_metrics(&app, area, &mut buf);
        assert!(buffer_text(&buf).trim().is_empty());
    }
}
