use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("field configuration error: {0}")]
    Config(String),

    #[error("marker position ({x}, {z}) outside plane [0, {grid_size})")]
    MarkerOutOfBounds { x: f32, z: f32, grid_size: u32 },
}

pub type FieldResult<T> = Result<T, FieldError>;
