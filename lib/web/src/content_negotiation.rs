use crate::error::ResolverServerError;
use crate::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use headers::HeaderMapExt;
use headers_accept::Accept;
use mediatype::names::{APPLICATION, N_TRIPLES, TEXT, TURTLE};
use mediatype::{MediaType, Name};
use oxrdfio::RdfFormat;

/// Handles the content-negotiation for responses that are serialized by this server.
///
/// N-Triples is preferred and is also used if the request has no `Accept` header.
impl FromRequestParts<AppState> for RdfFormat {
    type Rejection = ResolverServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        static MEDIA_TYPES: [MediaType<'_>; 3] = [
            MediaType::new(APPLICATION, N_TRIPLES),
            MediaType::new(TEXT, TURTLE),
            MediaType::new(APPLICATION, Name::new_unchecked("rdf+xml")),
        ];
        static DEFAULT_MEDIA_TYPE: MediaType<'_> = MediaType::new(APPLICATION, N_TRIPLES);

        let accept = parts.headers.typed_get::<Accept>();
        let media_type = content_negotiation(
            accept,
            &MEDIA_TYPES,
            &DEFAULT_MEDIA_TYPE,
            "application/n-triples, text/turtle or application/rdf+xml",
        )?;

        RdfFormat::from_media_type(media_type.to_string().as_str()).ok_or_else(|| {
            ResolverServerError::BadRequest(format!(
                "Could not convert negotiated media type '{media_type}' to internal representation."
            ))
        })
    }
}

fn content_negotiation<'media>(
    accept: Option<Accept>,
    available: &'media [MediaType<'media>],
    default: &'media MediaType<'media>,
    example: &str,
) -> Result<MediaType<'media>, ResolverServerError> {
    let Some(accept) = accept else {
        return Ok(default.clone());
    };

    match accept.negotiate(available) {
        None => Err(ResolverServerError::ContentNegotiation(format!(
            "The accept header does not provide any accepted format like {example}."
        ))),
        Some(result) => Ok(result.clone()),
    }
}
