use crate::error::{AppError, AppResult};
use actix_web::web::Bytes;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

pub const INDEX_PAGE: &str = "index.html";
pub const VERIFY_PAGE: &str = "verify.html";

const BUNDLED_PAGES: &[(&str, &str)] = &[
    (INDEX_PAGE, include_str!("../../templates/index.html")),
    (VERIFY_PAGE, include_str!("../../templates/verify.html")),
];

/// Fetches an HTML page by file name.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn fetch(&self, name: &str) -> AppResult<Bytes>;
}

/// Pages held in memory, by default the ones compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedPages {
    pages: HashMap<String, Bytes>,
}

impl EmbeddedPages {
    pub fn bundled() -> Self {
        BUNDLED_PAGES
            .iter()
            .map(|&(name, html)| (name.to_string(), Bytes::from_static(html.as_bytes())))
            .collect()
    }
}

impl FromIterator<(String, Bytes)> for EmbeddedPages {
    fn from_iter<I: IntoIterator<Item = (String, Bytes)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl PageStore for EmbeddedPages {
    async fn fetch(&self, name: &str) -> AppResult<Bytes> {
        self.pages
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::PageNotFound(name.to_string()))
    }
}

/// Pages read from a directory on every request, so edits show up without a
/// restart.
#[derive(Debug, Clone)]
pub struct DirectoryPages {
    root: PathBuf,
}

impl DirectoryPages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl PageStore for DirectoryPages {
    async fn fetch(&self, name: &str) -> AppResult<Bytes> {
        // only bare file names
        let mut components = Path::new(name).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(AppError::PageNotFound(name.to_string()));
        }

        match tokio::fs::read(self.root.join(name)).await {
            Ok(contents) => Ok(Bytes::from(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::PageNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Clone)]
pub struct PageService {
    store: Arc<dyn PageStore>,
}

impl PageService {
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self { store }
    }

    /// Serves from `dir` when one is configured, otherwise the bundled pages.
    pub fn from_dir(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => {
                log::info!("Serving pages from {}", dir.display());
                Self::new(Arc::new(DirectoryPages::new(dir)))
            }
            None => Self::new(Arc::new(EmbeddedPages::bundled())),
        }
    }

    pub async fn page(&self, name: &str) -> AppResult<Bytes> {
        self.store.fetch(name).await
    }
}
