use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

use crate::models::schedule::{Action, ActionStatus, Customer, MonthGroup, ScheduleDocument};
use crate::models::view::{
    ActionCard, CALENDAR_TITLE, CalendarView, Card, CardTone, DayIndicator, MonthSection,
    NO_SERVICE_TEXT, StatusIcon, VendorLine,
};
use crate::service::schedule_service::{CalendarScreen, ScheduleSource};

const WINDOW_TBD: &str = "TBD";

/// One screen visit: mount a fresh screen against `source` and project it.
pub async fn visit_calendar<S: ScheduleSource + ?Sized>(
    source: &S,
    presenter: &CalendarPresenter,
) -> CalendarView {
    let mut screen = CalendarScreen::new();
    screen.mount(source).await;
    presenter.present_screen(&screen)
}

pub struct CalendarPresenter {
    tz: Tz,
}

impl CalendarPresenter {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn present_screen(&self, screen: &CalendarScreen) -> CalendarView {
        if screen.is_loading() {
            return CalendarView {
                title: CALENDAR_TITLE.to_string(),
                loading: true,
                months: Vec::new(),
            };
        }
        match screen.document() {
            Some(document) => self.present(document),
            None => CalendarView {
                title: CALENDAR_TITLE.to_string(),
                loading: false,
                months: Vec::new(),
            },
        }
    }

    pub fn present(&self, document: &ScheduleDocument) -> CalendarView {
        let months = document
            .calendar
            .iter()
            .map(|group| self.month_section(group, &document.customer))
            .collect();
        CalendarView {
            title: CALENDAR_TITLE.to_string(),
            loading: false,
            months,
        }
    }

    fn month_section(&self, group: &MonthGroup, customer: &Customer) -> MonthSection {
        let cards = if group.actions.is_empty() {
            vec![Card::Placeholder {
                text: NO_SERVICE_TEXT.to_string(),
                tone: CardTone::NoService,
                color: CardTone::NoService.hex().to_string(),
            }]
        } else {
            group
                .actions
                .iter()
                .map(|action| Card::Action(self.action_card(action, customer)))
                .collect()
        };
        MonthSection {
            key: format!("{}-{}", group.year, group.month),
            label: month_label(group.year, group.month),
            cards,
        }
    }

    fn action_card(&self, action: &Action, customer: &Customer) -> ActionCard {
        let day = action.scheduled_day(&self.tz);
        let tone = card_tone(action.status);
        ActionCard {
            id: action.id.clone(),
            title: action.name.clone(),
            tone,
            color: tone.hex().to_string(),
            status_line: status_line(action),
            day: day_indicator(day, action.status),
            vendor: action.vendor.as_ref().map(|vendor| VendorLine {
                name: vendor.vendor_name.clone(),
                phone: vendor.phone_number.clone(),
            }),
            street: customer.street.clone(),
        }
    }
}

pub fn card_tone(status: ActionStatus) -> CardTone {
    match status {
        ActionStatus::Completed => CardTone::Completed,
        ActionStatus::Scheduled => CardTone::Scheduled,
        _ => CardTone::Unscheduled,
    }
}

pub fn status_icon(status: ActionStatus) -> Option<StatusIcon> {
    match status {
        ActionStatus::Completed => Some(StatusIcon::CheckCircle),
        ActionStatus::Scheduled => Some(StatusIcon::Clock),
        ActionStatus::Unscheduled => Some(StatusIcon::Tbd),
        ActionStatus::Unknown => None,
    }
}

pub fn status_line(action: &Action) -> String {
    match action.status {
        ActionStatus::Completed => "Completed".to_string(),
        ActionStatus::Scheduled => format!(
            "Scheduled {} - {}",
            action.arrival_start_window.as_deref().unwrap_or(WINDOW_TBD),
            action.arrival_end_window.as_deref().unwrap_or(WINDOW_TBD)
        ),
        _ => "Schedule date & time TBD".to_string(),
    }
}

fn day_indicator(day: Option<NaiveDate>, status: ActionStatus) -> DayIndicator {
    DayIndicator {
        weekday: day.map(|d| d.format("%a").to_string().to_uppercase()),
        day_of_month: day.map(|d| d.day()),
        icon: status_icon(status),
    }
}

/// "March 2024". Months outside 1..=12 roll into the neighbouring year.
pub fn month_label(year: i32, month: i32) -> String {
    let total = i64::from(year) * 12 + i64::from(month) - 1;
    let normalized_year = total.div_euclid(12);
    let normalized_month = total.rem_euclid(12) + 1;
    i32::try_from(normalized_year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, normalized_month as u32, 1))
        .map(|first| first.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{}", year, month))
}
