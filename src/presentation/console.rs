use owo_colors::OwoColorize;
use std::fmt;

use crate::models::view::{ActionCard, CalendarView, Card, CardTone, DayIndicator, LOADING_TEXT};

const DAY_COLUMN_WIDTH: usize = 5;
const MIN_CARD_WIDTH: usize = 34;
const ADDRESS_PIN: &str = "⌖";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub enable_color: bool,
}

/// Terminal rendering of a [`CalendarView`].
pub struct CalendarConsoleView<'a> {
    pub view: &'a CalendarView,
    pub options: RenderOptions,
}

struct CardLine {
    text: String,
    bold: bool,
}

impl CardLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

impl<'a> fmt::Display for CalendarConsoleView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_width = DAY_COLUMN_WIDTH + 1 + MIN_CARD_WIDTH;
        let title = center(&self.view.title, total_width);
        if self.options.enable_color {
            writeln!(f, "{}", title.bold())?;
        } else {
            writeln!(f, "{}", title)?;
        }
        writeln!(f)?;

        if self.view.loading {
            return writeln!(f, "{}", LOADING_TEXT);
        }

        for month in &self.view.months {
            if self.options.enable_color {
                writeln!(f, "{}", month.label.underline())?;
            } else {
                writeln!(f, "{}", month.label)?;
            }
            for card in &month.cards {
                match card {
                    Card::Placeholder { text, tone, .. } => {
                        self.write_card(f, &[], &[CardLine::bold(text.as_str())], *tone)?;
                    }
                    Card::Action(card) => {
                        let day = day_column(&card.day);
                        self.write_card(f, &day, &card_lines(card), card.tone)?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<'a> CalendarConsoleView<'a> {
    fn write_card(
        &self,
        f: &mut fmt::Formatter<'_>,
        day: &[String],
        lines: &[CardLine],
        tone: CardTone,
    ) -> fmt::Result {
        let width = lines
            .iter()
            .map(|line| line.text.chars().count() + 2)
            .max()
            .unwrap_or(0)
            .max(MIN_CARD_WIDTH);
        let (r, g, b) = tone.rgb();
        let rows = day.len().max(lines.len());

        for row in 0..rows {
            let day_cell = day.get(row).map(String::as_str).unwrap_or("");
            write!(f, "{} ", center(day_cell, DAY_COLUMN_WIDTH))?;

            let Some(line) = lines.get(row) else {
                writeln!(f)?;
                continue;
            };
            let cell = pad_right(&format!(" {}", line.text), width);
            match (self.options.enable_color, line.bold) {
                (true, true) => writeln!(f, "{}", cell.bold().white().on_truecolor(r, g, b))?,
                (true, false) => writeln!(f, "{}", cell.white().on_truecolor(r, g, b))?,
                (false, _) => writeln!(f, "|{}|", cell)?,
            }
        }
        Ok(())
    }
}

fn card_lines(card: &ActionCard) -> Vec<CardLine> {
    let mut lines = vec![CardLine::bold(card.title.as_str())];
    if let Some(vendor) = &card.vendor {
        lines.push(CardLine::plain(vendor.name.as_str()));
        lines.push(CardLine::bold(vendor.phone.as_str()));
        lines.push(CardLine::plain(""));
    }
    lines.push(CardLine::plain(format!("{} {}", ADDRESS_PIN, card.street)));
    lines.push(CardLine::plain(card.status_line.as_str()));
    lines
}

fn day_column(day: &DayIndicator) -> Vec<String> {
    let mut column = Vec::new();
    if let (Some(weekday), Some(day_of_month)) = (&day.weekday, day.day_of_month) {
        column.push(weekday.clone());
        column.push(day_of_month.to_string());
    }
    if let Some(icon) = day.icon {
        column.push(icon.glyph().to_string());
    }
    column
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - len))
}

pub fn render(view: &CalendarView, options: RenderOptions) -> String {
    CalendarConsoleView { view, options }.to_string()
}
