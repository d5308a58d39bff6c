//! `trove add`: single-link addition.

use trove_client::{ArchiveNotifier, TitleResolver};
use trove_core::{reconcile, Outcome, Trove};
use trove_domain::Record;

use super::save_and_commit;
use crate::config::Config;

pub struct AddRequest {
    pub url: String,
    pub tags: Vec<String>,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub archive: bool,
    pub commit: bool,
}

pub async fn run(
    store: &Trove,
    config: &Config,
    request: AddRequest,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = store.load()?;

    let mut candidate = Record::new(request.url.clone());
    candidate.tags = request.tags.iter().map(String::as_str).collect();
    candidate.notes = request.notes;
    candidate.title = match request.title {
        Some(title) => Some(title),
        None => resolve_title(config, &request.url).await,
    };
    if let Some(title) = &candidate.title {
        println!("Title: {title}");
    }

    let outcome = reconcile(&mut records, candidate);
    match outcome {
        Outcome::Inserted => println!("Added: {}", request.url),
        Outcome::Merged => println!("Merged tags into existing entry: {}", request.url),
        Outcome::Skipped => println!("Already in trove: {}", request.url),
    }

    if outcome != Outcome::Skipped {
        save_and_commit(
            store,
            &records,
            &format!("Add {}", request.url),
            request.commit,
        )?;
    }

    if request.archive && outcome == Outcome::Inserted {
        notify_archive(config, &request.url).await;
    }

    Ok(())
}

async fn resolve_title(config: &Config, url: &str) -> Option<String> {
    match TitleResolver::new(&config.user_agent) {
        Ok(resolver) => resolver.resolve(url).await,
        Err(err) => {
            println!("Warning: title fetch unavailable: {err}");
            None
        }
    }
}

/// Best-effort snapshot request; failure is a warning.
pub(crate) async fn notify_archive(config: &Config, url: &str) {
    let notifier = match ArchiveNotifier::new(&config.user_agent, &config.archive_endpoint) {
        Ok(notifier) => notifier,
        Err(err) => {
            println!("Warning: archive request failed: {err}");
            return;
        }
    };
    match notifier.notify(url).await {
        Ok(()) => println!("Archive snapshot requested"),
        Err(err) => {
            tracing::warn!(url, error = %err, "archive request failed");
            println!("Warning: archive request failed: {err}");
        }
    }
}
