//! Desktop shell bridge for locally stored attachments.

use futures_util::future::BoxFuture;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Finds a previously downloaded attachment on the local file system.
pub trait AttachmentLocator: Send + Sync {
    fn find_attachment<'a>(
        &'a self,
        server_uuid: &'a str,
        file_id: u64,
    ) -> BoxFuture<'a, io::Result<Option<PathBuf>>>;
}

/// Looks for attachments stored as `<root>/<server_uuid>/<file_id>`.
#[derive(Debug, Clone)]
pub struct DirectoryLocator {
    root: PathBuf,
}

impl DirectoryLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AttachmentLocator for DirectoryLocator {
    fn find_attachment<'a>(
        &'a self,
        server_uuid: &'a str,
        file_id: u64,
    ) -> BoxFuture<'a, io::Result<Option<PathBuf>>> {
        Box::pin(async move {
            if !is_plain_component(server_uuid) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("server UUID '{server_uuid}' is not a plain directory name"),
                ));
            }
            let path = self.root.join(server_uuid).join(file_id.to_string());
            if tokio::fs::try_exists(&path).await? {
                Ok(Some(path))
            } else {
                Ok(None)
            }
        })
    }
}

/// True for exactly one normal path component (no separators, `..` or roots).
fn is_plain_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_directory_locator() {
        let root = std::env::temp_dir().join("issue_routes_locator_test");
        let server_dir = root.join("server-a");
        std::fs::create_dir_all(&server_dir).unwrap();
        std::fs::write(server_dir.join("17"), b"payload").unwrap();

        let locator = DirectoryLocator::new(&root);
        assert_eq!(
            locator.find_attachment("server-a", 17).await.unwrap(),
            Some(server_dir.join("17"))
        );
        assert_eq!(locator.find_attachment("server-a", 18).await.unwrap(), None);

        std::fs::remove_dir_all(&root).unwrap_or_default();
    }

    #[tokio::test]
    async fn test_server_uuid_cannot_escape_root() {
        let locator = DirectoryLocator::new(std::env::temp_dir().join("issue_routes_escape_test"));
        for uuid in ["../outside", "/etc", "a/b", "..", "."] {
            let err = locator.find_attachment(uuid, 1).await.unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{uuid}");
        }
    }
}
