use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;
use std::marker::PhantomData;
use validator::Validate;

/// A pipe that parses a string into an integer resource id
#[derive(Default)]
pub struct ParseIntPipe;

#[async_trait]
impl Pipe for ParseIntPipe {
    type Input = String;
    type Output = i64;

    async fn transform(&self, input: String) -> PipeResult<i64> {
        input
            .trim()
            .parse::<i64>()
            .map_err(|_| PipeError::Validation("Invalid integer".to_string()))
    }
}

/// A pipe that runs `validator` rules on a deserialized payload
///
/// The payload is passed through untouched when every rule holds.
pub struct ValidationPipe<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> ValidationPipe<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ValidationPipe<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Pipe for ValidationPipe<T>
where
    T: Validate + Send + 'static,
{
    type Input = T;
    type Output = T;

    async fn transform(&self, input: T) -> PipeResult<T> {
        input
            .validate()
            .map_err(|errors| PipeError::Validation(errors.to_string()))?;
        Ok(input)
    }
}
