//! Request body extraction

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{FieldError, ServiceError};

/// JSON body whose rejection is reported as a list of field errors.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(rejection) => Err(validation_error(rejection)),
        }
    }
}

fn validation_error(rejection: JsonRejection) -> ServiceError {
    let kind = match &rejection {
        JsonRejection::JsonDataError(_) => "value_error",
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "content_type",
        _ => "body_read",
    };

    ServiceError::Validation {
        status: rejection.status(),
        errors: vec![FieldError {
            loc: vec!["body".to_string()],
            msg: rejection.body_text(),
            kind: kind.to_string(),
        }],
    }
}
