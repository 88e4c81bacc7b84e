//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::id_generator::IdGenerator;
use crate::utils::url_validator::validate_target_url;
use serde_json::json;
use tracing::{debug, error, info, warn};

/// Service for creating and resolving short links.
///
/// Holds no mutable state; the store is the only shared resource. Identifier
/// uniqueness relies on the store's atomic set-if-absent, not on locking here.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    generator: IdGenerator,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: Arc<dyn LinkStore>, generator: IdGenerator) -> Self {
        Self { store, generator }
    }

    /// Validates `target` and stores it under a fresh random identifier.
    ///
    /// Every call allocates a new identifier, even for a target that was
    /// encoded before.
    ///
    /// # Collision Handling
    ///
    /// A candidate is committed only if the store reports the key was absent.
    /// On collision a new candidate is drawn immediately (no backoff). With a
    /// bounded generator the loop stops after `max_attempts` candidates.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `target` is not an HTTP/HTTPS URL (the
    ///   store is not touched)
    /// - [`AppError::IdSpaceExhausted`] if every attempt collided
    /// - [`AppError::Store`] on store faults
    pub async fn encode(&self, target: &str) -> Result<ShortLink, AppError> {
        let target = validate_target_url(target)?;

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let id = self.generator.generate();

            if self.store.set_if_absent(&id, target).await? {
                info!(id = %id, attempts, "Short link created");
                return Ok(ShortLink::new(id, target));
            }

            if self
                .generator
                .max_attempts()
                .is_some_and(|max| attempts >= max)
            {
                error!(id = %id, attempts, "Short id collision, no attempts left");
                return Err(AppError::IdSpaceExhausted { attempts });
            }

            warn!(id = %id, attempt = attempts, "Short id collision, retrying");
        }
    }

    /// Looks up the target stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    /// Returns [`AppError::Store`] on store faults.
    pub async fn resolve(&self, id: &str) -> Result<ShortLink, AppError> {
        match self.store.get(id).await? {
            Some(target) => Ok(ShortLink::new(id, target)),
            None => {
                debug!(id = %id, "Short link not found");
                Err(AppError::not_found(
                    "Short link not found",
                    json!({ "id": id }),
                ))
            }
        }
    }
}
