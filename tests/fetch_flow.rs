use std::net::SocketAddr;

use chrono_tz::America::New_York;
use maintenanceCalendar::clients::schedule_client::FetchError;
use maintenanceCalendar::models::view::{Card, CardTone, StatusIcon};
use maintenanceCalendar::service::calendar_presenter::{CalendarPresenter, visit_calendar};
use maintenanceCalendar::service::schedule_service::{HttpScheduleSource, ScheduleSource};
use tokio::time::{sleep, Duration};
use warp::Filter;

const SCHEDULE_BODY: &str = r#"{
    "customer": {"id": "c-17", "firstName": "Dana", "street": "1 Main St"},
    "calendar": [
        {"year": 2024, "month": 3, "actions": []},
        {"year": 2024, "month": 4, "actions": [
            {
                "id": "a1",
                "name": "Gutter Cleaning",
                "status": "Completed",
                "scheduledDate": "2024-04-02",
                "vendor": {"vendorName": "Acme Gutters", "phoneNumber": "555-0100"}
            },
            {
                "id": "a2",
                "name": "HVAC Tune-up",
                "status": "Scheduled",
                "scheduledDate": "2024-04-23",
                "arrivalStartWindow": "8am",
                "arrivalEndWindow": "10am"
            },
            {
                "id": "a3",
                "name": "Roof Inspection",
                "status": "Unscheduled"
            }
        ]}
    ]
}"#;

fn free_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

async fn wait_until_listening(addr: SocketAddr) {
    for _ in 0..100 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return;
        }
        sleep(Duration::from_millis(20)).await;
    }
    panic!("stub server never came up on {}", addr);
}

async fn spawn_stub_api() -> SocketAddr {
    let schedule = warp::path!("schedule").map(|| {
        warp::reply::with_header(SCHEDULE_BODY, "content-type", "application/json")
    });
    let broken = warp::path!("broken").map(|| {
        warp::reply::with_status("upstream down", warp::http::StatusCode::BAD_GATEWAY)
    });
    let garbled = warp::path!("garbled").map(|| "{\"customer\": ");

    let addr = free_addr();
    tokio::spawn(warp::serve(schedule.or(broken).or(garbled)).run(addr));
    wait_until_listening(addr).await;
    addr
}

#[tokio::test]
async fn fetches_and_projects_remote_schedule() {
    let addr = spawn_stub_api().await;
    let source = HttpScheduleSource::new(format!("http://{}/schedule", addr));

    let view = visit_calendar(&source, &CalendarPresenter::new(New_York)).await;

    assert!(!view.loading);
    assert_eq!(view.months.len(), 2);
    assert_eq!(view.months[0].label, "March 2024");
    assert!(matches!(
        &view.months[0].cards[..],
        [Card::Placeholder { text, .. }] if text == "No Maintenance Scheduled"
    ));

    let cards: Vec<_> = view.months[1]
        .cards
        .iter()
        .map(|card| match card {
            Card::Action(card) => card.clone(),
            Card::Placeholder { .. } => panic!("April has actions"),
        })
        .collect();
    assert_eq!(cards.len(), 3);

    assert_eq!(cards[0].tone, CardTone::Completed);
    assert_eq!(cards[0].status_line, "Completed");
    assert_eq!(cards[0].day.weekday.as_deref(), Some("TUE"));
    assert_eq!(cards[0].day.day_of_month, Some(2));
    assert_eq!(cards[0].day.icon, Some(StatusIcon::CheckCircle));
    assert_eq!(cards[0].vendor.as_ref().unwrap().phone, "555-0100");

    assert_eq!(cards[1].status_line, "Scheduled 8am - 10am");
    assert!(cards[1].vendor.is_none());

    assert_eq!(cards[2].tone, CardTone::Unscheduled);
    assert_eq!(cards[2].status_line, "Schedule date & time TBD");
    assert_eq!(cards[2].day.weekday, None);
    assert_eq!(cards[2].day.icon, Some(StatusIcon::Tbd));
    assert!(cards.iter().all(|card| card.street == "1 Main St"));
}

#[tokio::test]
async fn fetched_document_keeps_customer_fields_it_does_not_display() {
    let addr = spawn_stub_api().await;
    let source = HttpScheduleSource::new(format!("http://{}/schedule", addr));

    let document = source.fetch_schedule().await.unwrap();
    let printed = serde_json::to_value(&document).unwrap();

    assert_eq!(printed["customer"]["firstName"], "Dana");
    assert_eq!(printed["customer"]["id"], "c-17");
    assert_eq!(printed["customer"]["street"], "1 Main St");
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let addr = spawn_stub_api().await;
    let source = HttpScheduleSource::new(format!("http://{}/broken", addr));

    let err = source.fetch_schedule().await.unwrap_err();

    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_degrades_to_title_only() {
    let addr = spawn_stub_api().await;
    let source = HttpScheduleSource::new(format!("http://{}/garbled", addr));

    assert!(matches!(
        source.fetch_schedule().await,
        Err(FetchError::Parse { .. })
    ));

    let view = visit_calendar(&source, &CalendarPresenter::new(New_York)).await;
    assert_eq!(view.title, "Calendar");
    assert!(!view.loading);
    assert!(view.months.is_empty());
}

#[tokio::test]
async fn unreachable_host_degrades_to_title_only() {
    let addr = free_addr();
    let source = HttpScheduleSource::new(format!("http://{}/schedule", addr));

    let view = visit_calendar(&source, &CalendarPresenter::new(New_York)).await;

    assert!(!view.loading);
    assert!(view.months.is_empty());
}
