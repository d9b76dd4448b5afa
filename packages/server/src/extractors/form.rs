use std::convert::Infallible;

use axum::{
    Form,
    extract::{FromRequest, Request},
};

/// A form extractor that never rejects.
///
/// The body is decoded as a list of name/value pairs, so repeated names are
/// kept and left for `T` to resolve. A body that cannot be read as a
/// URL-encoded form yields `T::default()`, which the handler treats like a
/// form with every field left blank.
pub struct LenientForm<T>(pub T);

impl<S, T> FromRequest<S> for LenientForm<T>
where
    T: FromIterator<(String, String)> + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => Ok(LenientForm(pairs.into_iter().collect())),
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Unreadable form body");
                Ok(LenientForm(T::default()))
            }
        }
    }
}
