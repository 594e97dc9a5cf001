use std::convert::Infallible;
use std::sync::Arc;

use chrono_tz::Tz;
use warp::{Filter, Rejection, Reply};

use crate::config::Settings;
use crate::presentation::console::{self, RenderOptions};
use crate::service::calendar_presenter::{CalendarPresenter, visit_calendar};
use crate::service::schedule_service::{HttpScheduleSource, ScheduleSource};

pub async fn run_api(settings: Settings) {
    let source: Arc<dyn ScheduleSource> =
        Arc::new(HttpScheduleSource::new(settings.schedule_url.clone()));
    let routes = routes(source, settings.timezone);

    tracing::info!(
        addr = %settings.api_addr,
        schedule_url = %settings.schedule_url,
        "Serving maintenance calendar"
    );
    warp::serve(routes).run(settings.api_addr).await;
}

// Every calendar request is its own screen visit with a single fetch.
pub fn routes(
    source: Arc<dyn ScheduleSource>,
    tz: Tz,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let with_source = warp::any().map(move || source.clone());
    let with_tz = warp::any().map(move || tz);

    let json_route = warp::path!("calendar")
        .and(warp::get())
        .and(with_source.clone())
        .and(with_tz.clone())
        .and_then(calendar_json);
    let text_route = warp::path!("calendar.txt")
        .and(warp::get())
        .and(with_source)
        .and(with_tz)
        .and_then(calendar_text);
    let health = warp::path!("health").and(warp::get()).map(|| "ok");

    json_route.or(text_route).or(health)
}

async fn calendar_json(source: Arc<dyn ScheduleSource>, tz: Tz) -> Result<impl Reply, Infallible> {
    let view = visit_calendar(source.as_ref(), &CalendarPresenter::new(tz)).await;
    Ok(warp::reply::json(&view))
}

async fn calendar_text(source: Arc<dyn ScheduleSource>, tz: Tz) -> Result<impl Reply, Infallible> {
    let view = visit_calendar(source.as_ref(), &CalendarPresenter::new(tz)).await;
    Ok(console::render(&view, RenderOptions { enable_color: false }))
}
