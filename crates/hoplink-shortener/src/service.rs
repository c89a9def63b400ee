use crate::creator::Creator;
use crate::error::CreateError;
use crate::generator::CodeGenerator;
use crate::model::{CreateRequest, CreateResponse};
use async_trait::async_trait;
use hoplink_core::{ObjectStore, UrlRecord};
use std::sync::Arc;
use tracing::debug;

type Result<T> = std::result::Result<T, CreateError>;

/// A concrete implementation of the [`Creator`] trait.
///
/// Wraps an `ObjectStore` and a `CodeGenerator` to handle:
/// - request body parsing and validation
/// - short code generation
/// - record persistence
///
/// Note: the generator is responsible for making collisions negligible.
/// No existence check is performed before the write; on the vanishing
/// chance of a collision the last writer wins silently.
#[derive(Debug, Clone)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    base_url: String,
}

impl<S: ObjectStore, G: CodeGenerator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService`.
    ///
    /// `base_url` is the deployment-time prefix used to compose the
    /// shortened URL returned to callers.
    pub fn new(store: S, generator: G, base_url: impl Into<String>) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl<S: ObjectStore, G: CodeGenerator> Creator for ShortenerService<S, G> {
    async fn create(&self, raw_body: &str) -> Result<CreateResponse> {
        let request = parse_request(raw_body)?;
        let (original_url, expiration_time) = validate_request(request)?;

        let code = self.generator.generate();
        let record = UrlRecord {
            original_url,
            expiration_time,
        };
        let bytes = record
            .to_json_bytes()
            .map_err(|e| CreateError::Storage(format!("serializing record: {e}")))?;

        self.store.put(&code.object_key(), bytes).await?;
        debug!(code = %code, expiration_time, "stored url record");

        Ok(CreateResponse {
            shortened_url: code.to_url(&self.base_url),
            code: code.as_str().to_owned(),
        })
    }
}

fn parse_request(raw_body: &str) -> Result<CreateRequest> {
    if raw_body.trim().is_empty() {
        return Err(CreateError::InvalidInput(
            "Request body is missing".to_string(),
        ));
    }

    serde_json::from_str(raw_body)
        .map_err(|e| CreateError::InvalidInput(format!("Error parsing JSON body: {e}")))
}

fn validate_request(request: CreateRequest) -> Result<(String, i64)> {
    let original_url = match request.original_url {
        Some(url) if !url.is_empty() => url,
        _ => {
            return Err(CreateError::InvalidInput(
                "Missing or empty 'originalUrl'".to_string(),
            ))
        }
    };

    let raw_expiration = match request.expiration_time {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return Err(CreateError::InvalidInput(
                "Missing or empty 'expirationTime'".to_string(),
            ))
        }
    };

    let expiration_time = raw_expiration.parse::<i64>().map_err(|_| {
        CreateError::InvalidInput("Invalid 'expirationTime', must be a valid number".to_string())
    })?;

    Ok((original_url, expiration_time))
}
