use crate::errors::AppError;
use crate::export::{to_csv, EXPORT_FILENAME};
use crate::models::{SubmitForm, SubmitResponse, SummaryResponse, UsageRecord};
use crate::state::AppState;
use crate::stats::{build_summary, check_alert, sorted_by_date};
use crate::ui::render_index;
use axum::{
    extract::{rejection::FormRejection, State},
    http::header,
    response::{Html, IntoResponse},
    Form, Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.usage_threshold))
}

pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Form(form) = form.inspect_err(|rejection| {
        warn!("rejected submission body: {}", rejection.body_text());
    })?;
    let record = UsageRecord::from_submission(&form).inspect_err(|err| {
        warn!("rejected submission: {err}");
    })?;

    let mut store = state.store.lock().await;
    info!(
        date = %record.date,
        usage = record.usage,
        category = ?record.category,
        "recorded usage"
    );
    store.append(record);

    let alert = check_alert(store.all(), state.usage_threshold);
    if let Some(message) = alert.message {
        info!(records = store.len(), "{message}");
    }

    Ok(Json(SubmitResponse::success()))
}

pub async fn get_data(State(state): State<AppState>) -> Json<Vec<UsageRecord>> {
    let store = state.store.lock().await;
    Json(sorted_by_date(store.all()))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let store = state.store.lock().await;
    Json(build_summary(store.all(), state.usage_threshold))
}

pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = {
        let store = state.store.lock().await;
        to_csv(store.all())?
    };

    let disposition = format!("attachment; filename=\"{EXPORT_FILENAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
