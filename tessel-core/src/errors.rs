use thiserror::Error;

pub type Result<T> = std::result::Result<T, TesselError>;

#[derive(Debug, Error)]
pub enum TesselError {
    #[error("No outputs available at startup")]
    NoOutputs,
    #[error("Could not spawn `{0}`")]
    SpawnFailed(String),
}
