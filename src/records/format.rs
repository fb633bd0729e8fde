//! Cell formatting helpers: currency, status badges and progress bars.

use super::models::{ClientStatus, InstallationStatus, OrderStatus, ProductionStatus, SubmissionStatus};
use crate::table::CellValue;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const NBSP: char = '\u{a0}';

/// Format an amount as Canadian dollars, French-Canadian style.
///
/// # Arguments
/// * `amount` - Amount in dollars
///
/// # Returns
/// * `String` - e.g. `12 500,00 $`, with non-breaking spaces
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(ch);
    }

    format!("{}{},{:02}{}$", sign, grouped, cents % 100, NBSP)
}

/// Statuses that render as a coloured badge.
pub trait Badge: Copy {
    fn parse(label: &str) -> Option<Self>;
    fn label(self) -> &'static str;
    fn color(self) -> Color;
}

macro_rules! badge_colors {
    ($ty:ident { $($variant:ident => $color:expr),+ $(,)? }) => {
        impl Badge for $ty {
            fn parse(label: &str) -> Option<Self> {
                $ty::from_label(label)
            }

            fn label(self) -> &'static str {
                $ty::label(self)
            }

            fn color(self) -> Color {
                match self {
                    $($ty::$variant => $color,)+
                }
            }
        }
    };
}

badge_colors!(ClientStatus {
    Active => Color::Green,
    Inactive => Color::Red,
});

badge_colors!(SubmissionStatus {
    Pending => Color::Yellow,
    Accepted => Color::Green,
    InRevision => Color::Magenta,
});

badge_colors!(OrderStatus {
    Pending => Color::Red,
    InProduction => Color::Yellow,
    Done => Color::Green,
});

badge_colors!(ProductionStatus {
    Pending => Color::Red,
    Manufacturing => Color::Yellow,
    Ready => Color::Green,
});

badge_colors!(InstallationStatus {
    Pending => Color::Red,
    InProgress => Color::Yellow,
    Complete => Color::Green,
});

/// Render a status cell as a badge.
///
/// # Details
/// The badge is chosen from the cell's literal value. A value that is not a
/// known status is shown as plain text.
pub fn status_badge<S: Badge>(value: &CellValue) -> Line<'static> {
    let text = value.to_string();
    match S::parse(&text) {
        Some(status) => Line::from(Span::styled(
            format!("● {}", status.label()),
            Style::default()
                .fg(status.color())
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(text),
    }
}

/// Render a currency cell.
pub fn currency_cell(value: &CellValue) -> Line<'static> {
    match value {
        CellValue::Number(amount) => Line::from(format_currency(*amount)),
        other => Line::from(other.to_string()),
    }
}

/// Render a 0-100 progress value as a bar.
///
/// # Details
/// Ten cells wide, followed by the percentage.
pub fn progress_bar(value: &CellValue) -> Line<'static> {
    let CellValue::Number(percent) = value else {
        return Line::from(value.to_string());
    };
    let percent = percent.clamp(0.0, 100.0);
    let filled = (percent / 10.0).round() as usize;
    let color = if percent >= 100.0 { Color::Green } else { Color::Blue };
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(10 - filled), Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {:>3}%", percent as u8)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12500.0), "12\u{a0}500,00\u{a0}$");
        assert_eq!(format_currency(875.5), "875,50\u{a0}$");
        assert_eq!(format_currency(1234567.891), "1\u{a0}234\u{a0}567,89\u{a0}$");
        assert_eq!(format_currency(0.0), "0,00\u{a0}$");
        assert_eq!(format_currency(-42.0), "-42,00\u{a0}$");
    }

    #[test]
    fn test_status_badge_follows_literal_value() {
        let active = status_badge::<ClientStatus>(&CellValue::text("Actif"));
        assert_eq!(active.spans[0].content, "● Actif");
        assert_eq!(active.spans[0].style.fg, Some(Color::Green));

        let inactive = status_badge::<ClientStatus>(&CellValue::text("Non Actif"));
        assert_eq!(inactive.spans[0].content, "● Non Actif");
        assert_eq!(inactive.spans[0].style.fg, Some(Color::Red));
    }

    #[test]
    fn test_unknown_status_is_plain() {
        let line = status_badge::<OrderStatus>(&CellValue::text("Annulé"));
        assert_eq!(line, Line::from("Annulé"));
    }

    #[test]
    fn test_progress_bar() {
        let line = progress_bar(&CellValue::Number(60.0));
        assert_eq!(line.spans[0].content, "██████");
        assert_eq!(line.spans[1].content, "░░░░");
        assert_eq!(line.spans[2].content, "  60%");

        let done = progress_bar(&CellValue::Number(100.0));
        assert_eq!(done.spans[0].style.fg, Some(Color::Green));
    }
}
