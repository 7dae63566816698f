pub mod client;
pub mod error;
pub mod pager;
pub mod protocol;
pub mod routes;
pub mod session;
pub mod traits;
pub mod types;

pub use client::{ApiClient, ApiOutcome, ApiRequest, ClientConfig};
pub use error::{ApiError, Result};
pub use pager::{PageEvent, PageFeed, SegmentPager};
pub use routes::{ResourceKind, ResourceSegment};
pub use session::{SessionEvent, SessionService};
pub use traits::{
    Clipboard, CredentialStore, FileCredentialStore, MemoryClipboard, MemoryCredentialStore,
};
