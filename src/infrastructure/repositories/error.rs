use crate::domain::errors::DomainError;
use std::path::Path;

pub fn map_io(path: &Path, err: std::io::Error) -> DomainError {
    DomainError::Persistence(format!("failed to read {}: {err}", path.display()))
}

pub fn map_yaml(path: &Path, err: serde_yaml::Error) -> DomainError {
    DomainError::Persistence(format!(
        "invalid front matter in {}: {err}",
        path.display()
    ))
}

pub fn map_content(path: &Path, err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(msg) => {
            DomainError::Persistence(format!("invalid article {}: {msg}", path.display()))
        }
        other => other,
    }
}
