//! View Handlers - 浏览器页面
//!
//! 每个请求：按 Cookie 取出会话的控制器快照，依次分派事件，写回，渲染。

use axum::{
    extract::{Path, Query, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use maud::{Markup, PreEscaped};
use std::str::FromStr;
use std::sync::Arc;

use crate::application::{MountPoint, Screen, Session, ViewController, ViewEvent};
use crate::domain::catalog::{BookId, Gender};
use crate::infrastructure::http::cookie::{session_cookie, session_id};
use crate::infrastructure::http::dto::{AuthorsParams, BrowseParams, SelectParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 一次请求处理后的会话
struct Handled {
    controller: ViewController,
    /// 新建会话时需要下发的 Cookie
    new_session: Option<String>,
}

impl Handled {
    fn respond(self, body: Markup) -> Response {
        let mut response = body.into_response();
        if let Some(id) = self.new_session {
            match HeaderValue::from_str(&session_cookie(&id)) {
                Ok(value) => {
                    response.headers_mut().insert(SET_COOKIE, value);
                }
                Err(e) => tracing::warn!(error = %e, "Invalid session cookie"),
            }
        }
        response
    }

    fn document(self, state: &AppState) -> Response {
        let body = self.controller.render_document(state.renderer());
        self.respond(body)
    }
}

/// 依次分派事件并写回会话
///
/// 新会话先执行一次 Refresh，相当于页面首次加载。
async fn handle_events(
    state: &AppState,
    headers: &HeaderMap,
    events: Vec<ViewEvent>,
) -> Result<Handled, ApiError> {
    let existing = session_id(headers).and_then(|id| state.session_manager.get(&id).ok());

    let (id, mut controller, new_session) = match existing {
        Some(session) => (session.id, session.controller, None),
        None => {
            let mut controller = ViewController::new(state.default_sort.clone());
            controller
                .dispatch(ViewEvent::Refresh, &state.services)
                .await;
            let id = state.session_manager.create(Session::new(controller.clone()))?;
            (id.clone(), controller, Some(id))
        }
    };

    for event in events {
        controller.dispatch(event, &state.services).await;
    }

    if let Err(e) = state.session_manager.save(&id, controller.clone()) {
        tracing::warn!(session_id = %id, error = %e, "Failed to save session");
    }

    Ok(Handled {
        controller,
        new_session,
    })
}

/// 主屏幕上没有参数时重新渲染书目
fn browse_events(params: BrowseParams, headers: &HeaderMap, state: &AppState) -> Vec<ViewEvent> {
    let events = params.into_events();
    if !events.is_empty() {
        return events;
    }
    let on_main = session_id(headers)
        .and_then(|id| state.session_manager.get(&id).ok())
        .map(|session| session.controller.state().screen == Screen::Main)
        .unwrap_or(false);
    if on_main {
        vec![ViewEvent::Refresh]
    } else {
        Vec::new()
    }
}

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<BrowseParams>,
) -> Result<Response, ApiError> {
    let events = browse_events(params, &headers, &state);
    Ok(handle_events(&state, &headers, events).await?.document(&state))
}

/// GET /fragments/books - 只返回书目容器
pub async fn books_fragment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<BrowseParams>,
) -> Result<Response, ApiError> {
    let mut events = params.into_events();
    if events.is_empty() {
        events.push(ViewEvent::Refresh);
    }
    let handled = handle_events(&state, &headers, events).await?;
    let body = PreEscaped(
        handled
            .controller
            .page()
            .html(MountPoint::BooksContainer)
            .to_string(),
    );
    Ok(handled.respond(body))
}

/// GET /view/all
pub async fn show_all_books(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let handled = handle_events(&state, &headers, vec![ViewEvent::ShowAllBooks]).await?;
    Ok(handled.document(&state))
}

/// GET /view/authors[?gender=M|F]
pub async fn show_authors(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<AuthorsParams>,
) -> Result<Response, ApiError> {
    let gender = params
        .gender
        .filter(|g| !g.trim().is_empty())
        .map(|g| Gender::from_str(&g))
        .transpose()
        .map_err(ApiError::BadRequest)?;

    let handled = handle_events(&state, &headers, vec![ViewEvent::ShowAuthors { gender }]).await?;
    Ok(handled.document(&state))
}

/// GET /view/series
pub async fn show_series(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let handled = handle_events(&state, &headers, vec![ViewEvent::ShowSeries]).await?;
    Ok(handled.document(&state))
}

/// GET /view/subjects
pub async fn show_subjects(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let handled = handle_events(&state, &headers, vec![ViewEvent::ShowSubjects]).await?;
    Ok(handled.document(&state))
}

/// GET /select?name=...
pub async fn select_item(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<SelectParams>,
) -> Result<Response, ApiError> {
    let handled =
        handle_events(&state, &headers, vec![ViewEvent::SelectListItem(params.name)]).await?;
    Ok(handled.document(&state))
}

/// GET /book/:id
pub async fn open_book(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let handled =
        handle_events(&state, &headers, vec![ViewEvent::OpenBook(BookId::new(id))]).await?;
    Ok(handled.document(&state))
}

/// GET /modal/close
pub async fn close_book(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let handled = handle_events(&state, &headers, vec![ViewEvent::CloseBook]).await?;
    Ok(handled.document(&state))
}
