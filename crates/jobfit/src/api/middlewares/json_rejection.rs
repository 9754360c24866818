use std::borrow::Cow;

use axum::{
  Json, RequestExt,
  body::Body,
  extract::{FromRequest, rejection::JsonRejection},
  http::{Request, StatusCode},
  response::IntoResponse,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::api::errors::ApiError;

/// JSON extractor that also runs the payload's `validator` rules, mapping
/// both kinds of failure to structured error responses.
pub struct TypedJson<T>(pub T);

pub enum TypedJsonRejection {
  Json(JsonRejection),
  Validation(ValidationErrors),
}

impl<T, S> FromRequest<S> for TypedJson<T>
where
  T: DeserializeOwned + Validate + 'static,
  S: Send + Sync,
{
  type Rejection = TypedJsonRejection;

  async fn from_request(request: Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
    let Json(dto) = request.extract::<Json<T>, _>().await.map_err(TypedJsonRejection::Json)?;

    dto.validate().map_err(TypedJsonRejection::Validation)?;

    Ok(TypedJson(dto))
  }
}

impl IntoResponse for TypedJsonRejection {
  fn into_response(self) -> axum::response::Response {
    match self {
      TypedJsonRejection::Json(err) => match err {
        JsonRejection::JsonSyntaxError(_) => ApiError(StatusCode::BAD_REQUEST, "invalid payload format".to_string(), None).into_response(),
        JsonRejection::JsonDataError(err) => ApiError(StatusCode::BAD_REQUEST, "payload does not match expected format".to_string(), Some(vec![err.to_string()])).into_response(),
        JsonRejection::MissingJsonContentType(_) => ApiError(StatusCode::UNSUPPORTED_MEDIA_TYPE, "invalid media type, expected application/json".to_string(), None).into_response(),
        err => ApiError(StatusCode::BAD_REQUEST, "invalid payload".to_string(), Some(vec![err.to_string()])).into_response(),
      },

      TypedJsonRejection::Validation(errs) => {
        let messages = errs.field_errors().into_iter().flat_map(|(_, f)| f.clone()).filter_map(|f| f.message.map(Cow::into_owned)).collect();

        ApiError(StatusCode::UNPROCESSABLE_ENTITY, "payload failed validation".to_string(), Some(messages)).into_response()
      }
    }
  }
}
