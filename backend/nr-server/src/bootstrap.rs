//! Startup import of nurses from a JSON seed file.
//!
//! Seeds go through the registration service, so every entry is validated
//! and its password hashed exactly like a live registration. Seeding only
//! runs against an empty store.

use crate::error::{Result as ServerErrorResult, ServerError};
use crate::{AppState, profile_picture};

use nr_auth::RegistrationRequest;

use std::path::Path;

use log::{debug, info, warn};
use serde::Deserialize;

/// One entry of the seed file
#[derive(Deserialize)]
pub struct SeedNurse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Register every nurse in the JSON array at `path`.
///
/// A missing file or a non-empty store is a no-op. Entries the registration
/// rules reject are logged and skipped.
pub async fn seed_nurses(state: &AppState, path: &Path) -> ServerErrorResult<SeedReport> {
    let existing = state.store.count().await?;
    if existing > 0 {
        debug!("Store already holds {} nurses; skipping seed import", existing);
        return Ok(SeedReport::default());
    }

    if !tokio::fs::try_exists(path).await? {
        warn!("Seed file {} not found; skipping nurse bootstrap", path.display());
        return Ok(SeedReport::default());
    }

    let contents = tokio::fs::read_to_string(path).await?;
    let entries: Vec<SeedNurse> =
        serde_json::from_str(&contents).map_err(|e| ServerError::Seed {
            message: format!("{} is not a JSON array of nurses: {}", path.display(), e),
        })?;

    let mut report = SeedReport::default();

    for (index, entry) in entries.into_iter().enumerate() {
        let picture = match profile_picture::decode(entry.profile_picture) {
            Ok(picture) => picture,
            Err(e) => {
                warn!("Skipping seed entry {}: {}", index, e);
                report.skipped += 1;
                continue;
            }
        };

        let request = RegistrationRequest {
            first_name: entry.first_name,
            last_name: entry.last_name,
            email: entry.email,
            password: entry.password,
            profile_picture: picture,
        };

        match state.registration.register(request).await {
            Ok(_) => report.imported += 1,
            Err(e) => {
                warn!("Skipping seed entry {}: {}", index, e);
                report.skipped += 1;
            }
        }
    }

    info!(
        "Imported {} nurses from {} ({} skipped)",
        report.imported,
        path.display(),
        report.skipped
    );

    Ok(report)
}
