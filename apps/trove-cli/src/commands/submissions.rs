//! `trove process-submissions`: issue-queue ingestion and title backfill.

use std::collections::HashMap;

use trove_client::TitleResolver;
use trove_core::submission::Submission;
use trove_core::{backfill, reconcile, Outcome, Trove};
use trove_git::IssueQueue;

use super::{add::notify_archive, save_and_commit};
use crate::config::Config;

/// Drain the open submission queue. Every submission with a URL is closed
/// after processing, whether it inserted, merged, or was a no-op; a missing
/// URL leaves the item open.
pub async fn run(
    store: &Trove,
    config: &Config,
    commit: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let queue = IssueQueue::new(&config.submission_label);
    let issues = queue.list_open()?;
    if issues.is_empty() {
        println!("No open submission issues found");
        return Ok(());
    }

    let mut records = store.load()?;
    let resolver = match TitleResolver::new(&config.user_agent) {
        Ok(resolver) => Some(resolver),
        Err(err) => {
            println!("Warning: title fetch unavailable: {err}");
            None
        }
    };
    let mut processed = 0usize;
    let mut merged = 0usize;

    for issue in &issues {
        let Some(submission) = Submission::from_body(&issue.body) else {
            println!("Issue #{}: No URL found, skipping", issue.number);
            continue;
        };
        let url = submission.url.clone();

        match reconcile(&mut records, submission.into_record()) {
            Outcome::Inserted => {
                println!("Issue #{}: Processing {url}", issue.number);
                if let Some(resolver) = &resolver {
                    fill_inserted_title(resolver, &mut records, &url).await;
                }
                notify_archive(config, &url).await;
                processed += 1;
            }
            Outcome::Merged => {
                println!("Issue #{}: Merged tags into existing URL", issue.number);
                merged += 1;
            }
            Outcome::Skipped => {
                println!("Issue #{}: URL already exists, no new tags", issue.number);
            }
        }
        close_issue(&queue, issue.number);
    }

    if processed > 0 || merged > 0 {
        save_and_commit(
            store,
            &records,
            &format!("Add {processed} submitted link(s)"),
            commit,
        )?;
        if processed > 0 {
            println!("Added {processed} link(s) to {}", store.path().display());
        }
        if merged > 0 {
            println!("Merged tags for {merged} existing link(s)");
        }
    } else {
        println!("No new links to add");
    }

    Ok(())
}

/// Sweep the store for records without titles and try to resolve each one.
pub async fn fill_titles(
    store: &Trove,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = store.load()?;
    let missing = backfill::missing_title_urls(&records);
    if missing.is_empty() {
        println!("All links have titles");
        return Ok(());
    }
    println!("Found {} link(s) without titles", missing.len());

    let resolver = TitleResolver::new(&config.user_agent)?;
    let mut titles = HashMap::new();
    for url in &missing {
        println!("Fetching title for {url}...");
        match resolver.resolve(url).await {
            Some(title) => {
                println!("  -> {title}");
                titles.insert(url.clone(), title);
            }
            None => println!("  -> (no title found)"),
        }
    }

    let updated = backfill::apply_titles(&mut records, &titles);
    if updated > 0 {
        store.save(&records)?;
        println!("Updated {updated} link(s)");
    } else {
        println!("No titles found to update");
    }

    Ok(())
}

/// Resolve a title for a just-inserted record; best-effort.
async fn fill_inserted_title(
    resolver: &TitleResolver,
    records: &mut [trove_domain::Record],
    url: &str,
) {
    if let Some(title) = resolver.resolve(url).await {
        println!("  Found title: {title}");
        if let Some(record) = records.iter_mut().find(|r| r.url == url) {
            record.title = Some(title);
        }
    }
}

fn close_issue(queue: &IssueQueue, number: u64) {
    match queue.close(number) {
        Ok(()) => println!("Closed issue #{number}"),
        Err(err) => {
            tracing::warn!(number, error = %err, "issue close failed");
            println!("Could not close issue #{number}: {err}");
        }
    }
}
