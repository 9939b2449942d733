//! Nurse REST API handlers

use crate::{
    ApiResult, AppState, DeleteResponse, LoginRequest, LoginResponse, NurseDto,
    NurseListResponse, NurseResponse, RegisterNurseRequest, UpdateNurseRequest,
};

use nr_auth::ServiceError;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};

/// POST /nurse/register
///
/// A taken email is reported as a conflict even when the picture does not
/// decode.
pub async fn register_nurse(
    State(state): State<AppState>,
    Json(req): Json<RegisterNurseRequest>,
) -> ApiResult<(StatusCode, Json<NurseResponse>)> {
    let email = req.email.clone();
    let registration = match req.into_registration() {
        Ok(registration) => registration,
        Err(picture_error) => {
            let taken = state
                .store
                .exists_by_email(&email)
                .await
                .map_err(ServiceError::from)?;
            if taken {
                return Err(ServiceError::conflict(email).into());
            }
            return Err(picture_error);
        }
    };

    let identity = state.registration.register(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(NurseResponse {
            nurse: identity.into(),
        }),
    ))
}

/// POST /nurse/login
///
/// 200 with a session cookie on success, 401 otherwise. Unknown email and
/// wrong password produce identical responses.
pub async fn login_nurse(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Response> {
    let outcome = state
        .authentication
        .login(&req.email, &req.password)
        .await?;

    let Some(binding) = outcome.session_binding() else {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse {
                authenticated: false,
            }),
        )
            .into_response());
    };

    let token = state.sessions.bind(binding).await;
    let cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax",
        state.cookie_name, token
    );

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(LoginResponse {
            authenticated: true,
        }),
    )
        .into_response())
}

/// GET /nurse/index
pub async fn list_nurses(State(state): State<AppState>) -> ApiResult<Json<NurseListResponse>> {
    let nurses = state.profiles.list().await?;

    Ok(Json(NurseListResponse {
        nurses: nurses.into_iter().map(NurseDto::from).collect(),
    }))
}

/// GET /nurse/name/{name}
pub async fn find_nurse_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<NurseResponse>> {
    let identity = state.profiles.find_by_name(&name).await?;

    Ok(Json(NurseResponse {
        nurse: identity.into(),
    }))
}

/// GET /nurse/{id}
pub async fn get_nurse(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<NurseResponse>> {
    let identity = state.profiles.get(id).await?;

    Ok(Json(NurseResponse {
        nurse: identity.into(),
    }))
}

/// PUT /nurse/{id}
///
/// An unknown id is reported as not found even when the picture does not
/// decode.
pub async fn update_nurse(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNurseRequest>,
) -> ApiResult<Json<NurseResponse>> {
    let update = match req.into_update() {
        Ok(update) => update,
        Err(picture_error) => {
            let exists = state
                .store
                .exists_by_id(id)
                .await
                .map_err(ServiceError::from)?;
            if !exists {
                return Err(ServiceError::not_found(id).into());
            }
            return Err(picture_error);
        }
    };

    let identity = state.profiles.update(id, update).await?;

    Ok(Json(NurseResponse {
        nurse: identity.into(),
    }))
}

/// DELETE /nurse/{id}
pub async fn delete_nurse(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    state.profiles.delete(id).await?;

    let dropped = state.sessions.remove_for_identity(id).await;
    if dropped > 0 {
        log::debug!("Dropped {} session(s) of deleted nurse {}", dropped, id);
    }

    Ok(Json(DeleteResponse { deleted_id: id }))
}
