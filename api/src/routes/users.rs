//! User endpoints backed by the repository in [`AppState`]

use actix_web::{web, HttpRequest, HttpResponse};
use eh_core::domain::NewUser;

use crate::app::AppState;
use crate::handlers::ApiResult;
use crate::middleware::RequestIdExt;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user)),
    );
}

/// POST /users
///
/// 422 for invalid input, 409 when the email is taken.
pub async fn create_user(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<NewUser>,
) -> ApiResult<HttpResponse> {
    let new_user = payload.into_inner();
    new_user.validate()?;

    let user = state.users.create(&new_user).await?;
    tracing::info!(
        user_id = user.id,
        request_id = req.request_id().as_deref().unwrap_or("-"),
        "user registered"
    );
    Ok(HttpResponse::Created().json(user))
}

/// GET /users/{id}
///
/// 404 when no row matches.
pub async fn get_user(state: web::Data<AppState>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    let user = state.users.find_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}
