//! Gallery handlers and the generic image-upload proxy.
//!
//! Files are validated (MIME type, size cap) before any network call, then
//! streamed to the media host. Gallery uploads land in a per-project folder
//! and persist a row; the generic proxy just returns the hosted URL.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_core::uploads::validate_image;
use vitrine_db::models::gallery::{DeleteGalleryImage, GalleryImage};
use vitrine_db::repositories::GalleryRepo;
use vitrine_media::public_id_from_url;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_project;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// One image file pulled out of a multipart payload.
struct ImageField {
    bytes: Vec<u8>,
    content_type: String,
    file_name: String,
}

/// GET /api/dashboard/{project_id}/get-gallery-images
///
/// Newest first, matching the dashboard grid.
pub async fn list_images(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<GalleryImage>>>> {
    ensure_project(&state.pool, project_id).await?;
    let images = GalleryRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: images }))
}

/// POST /api/dashboard/{project_id}/add-gallery-image
///
/// Multipart fields: `file` (required), `alt` (optional). The file is
/// uploaded into `projects/{project_id}/gallery` on the media host and the
/// returned URL is persisted.
pub async fn add_image(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    ensure_project(&state.pool, project_id).await?;

    let (file, fields) = read_image_multipart(multipart).await?;
    let file = file
        .ok_or_else(|| AppError::Core(CoreError::Validation("file field is required".into())))?;
    validate_image(&file.content_type, file.bytes.len())?;

    let alt = fields.alt.filter(|a| !a.trim().is_empty());
    let folder = format!("projects/{project_id}/gallery");

    let uploaded = state
        .media
        .upload(file.bytes, &file.content_type, &file.file_name, &folder)
        .await?;

    let image =
        GalleryRepo::insert(&state.pool, project_id, &uploaded.url, alt.as_deref()).await?;

    state.invalidator.content_changed(project_id).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// DELETE /api/dashboard/{project_id}/delete-gallery-image
///
/// The remote asset destroy is best-effort: a failure is logged and the
/// local row is removed regardless, so the dashboard never shows an image
/// the host already lost.
pub async fn delete_image(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<DeleteGalleryImage>,
) -> AppResult<StatusCode> {
    let image_id = input
        .image_id
        .ok_or_else(|| AppError::Core(CoreError::Validation("imageId is required".into())))?;

    let image = GalleryRepo::find_by_id(&state.pool, image_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Gallery image",
            id: image_id,
        }))?;

    if image.project_id != project_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Gallery image does not belong to this project".into(),
        )));
    }

    match public_id_from_url(&image.url) {
        Some(public_id) => {
            if let Err(err) = state.media.destroy(&public_id).await {
                tracing::warn!(image_id, error = %err, "Remote image destroy failed; removing local row anyway");
            }
        }
        None => {
            tracing::warn!(image_id, url = %image.url, "Could not derive a public id from the stored URL");
        }
    }

    let deleted = GalleryRepo::delete(&state.pool, image_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Gallery image",
            id: image_id,
        }));
    }

    state.invalidator.content_changed(project_id).await;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/upload-images
///
/// Generic upload proxy for the dashboard's image pickers (hero background,
/// about image, package image). Multipart fields: `file` (required),
/// `folder` (optional, defaults to the configured upload folder). Nothing
/// is persisted; the caller stores the returned URL wherever it belongs.
pub async fn upload_image(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let (file, fields) = read_image_multipart(multipart).await?;
    let file = file
        .ok_or_else(|| AppError::Core(CoreError::Validation("file field is required".into())))?;
    validate_image(&file.content_type, file.bytes.len())?;

    let folder = fields
        .folder
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| state.config.media.upload_folder.clone());

    let uploaded = state
        .media
        .upload(file.bytes, &file.content_type, &file.file_name, &folder)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: uploaded })))
}

/// Text fields that may accompany an image upload.
#[derive(Default)]
struct UploadFields {
    alt: Option<String>,
    folder: Option<String>,
}

/// Walk a multipart payload collecting the `file` part and the known text
/// fields. Unknown fields are skipped so frontend additions do not break
/// the endpoint.
async fn read_image_multipart(
    mut multipart: Multipart,
) -> Result<(Option<ImageField>, UploadFields), AppError> {
    let mut file = None;
    let mut fields = UploadFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec();
                file = Some(ImageField {
                    bytes,
                    content_type,
                    file_name,
                });
            }
            Some("alt") => {
                fields.alt = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            Some("folder") => {
                fields.folder = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    Ok((file, fields))
}
