use serde::Serialize;

pub const CALENDAR_TITLE: &str = "Calendar";
pub const LOADING_TEXT: &str = "Loading...";
pub const NO_SERVICE_TEXT: &str = "No Maintenance Scheduled";

/// Everything the calendar screen shows, ready to be drawn.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CalendarView {
    pub title: String,
    pub loading: bool,
    pub months: Vec<MonthSection>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonthSection {
    pub key: String,
    pub label: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Placeholder {
        text: String,
        tone: CardTone,
        color: String,
    },
    Action(ActionCard),
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ActionCard {
    pub id: String,
    pub title: String,
    pub tone: CardTone,
    pub color: String,
    pub status_line: String,
    pub day: DayIndicator,
    pub vendor: Option<VendorLine>,
    pub street: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct VendorLine {
    pub name: String,
    pub phone: String,
}

/// Left-hand column beside a card.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DayIndicator {
    pub weekday: Option<String>,
    pub day_of_month: Option<u32>,
    pub icon: Option<StatusIcon>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    CheckCircle,
    Clock,
    Tbd,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardTone {
    Completed,
    Scheduled,
    Unscheduled,
    NoService,
}

impl CardTone {
    pub fn hex(self) -> &'static str {
        match self {
            CardTone::Completed => "#00B47D",
            CardTone::Scheduled => "#006A4B",
            CardTone::Unscheduled => "#011638",
            CardTone::NoService => "#848FA5",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            CardTone::Completed => (0x00, 0xB4, 0x7D),
            CardTone::Scheduled => (0x00, 0x6A, 0x4B),
            CardTone::Unscheduled => (0x01, 0x16, 0x38),
            CardTone::NoService => (0x84, 0x8F, 0xA5),
        }
    }
}

impl StatusIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            StatusIcon::CheckCircle => "✔",
            StatusIcon::Clock => "◷",
            StatusIcon::Tbd => "TBD",
        }
    }
}
