use std::fmt;

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Unique columns of the `atleta` table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Cpf,
    Telefone,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf => write!(f, "CPF já cadastrado"),
            Self::Telefone => write!(f, "Telefone já cadastrado"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    DuplicateKey(UniqueField),

    #[error("Nenhum campo de atualização fornecido")]
    NoChanges,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StorageError::DuplicateKey(_) => true,
            StorageError::Database(e) => is_unique_violation(e),
            _ => false,
        }
    }
}

pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Database(e) if e.kind() == ErrorKind::UniqueViolation
    )
}
