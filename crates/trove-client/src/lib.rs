//! HTTP collaborators for trove.
//!
//! Both collaborators are best-effort: the title resolver returns `None` on
//! any failure and the archive notifier surfaces an error the caller logs as
//! a warning. Neither aborts the surrounding ingestion run.

mod archive;
mod error;
mod http;
mod title;

pub use archive::{ArchiveNotifier, DEFAULT_ARCHIVE_ENDPOINT};
pub use error::ClientError;
pub use http::HttpClient;
pub use title::TitleResolver;
