use crate::exception::HttpException;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Axum extractor for validated JSON bodies
///
/// Deserializes the body like [`axum::Json`] and then runs the payload's
/// `validator` rules. Both kinds of failure are rejected as a
/// [`HttpException`] of kind `BadRequest`.
///
/// # Example
/// ```
/// use scaffolds::extract::ValidatedJson;
/// use scaffolds::users::UserCreate;
/// use axum::Json;
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<UserCreate>) -> Json<UserCreate> {
///     Json(payload)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = HttpException;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpException::bad_request().with_message(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
