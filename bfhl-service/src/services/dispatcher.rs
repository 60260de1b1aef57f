use crate::error::BfhlError;
use crate::models::{Operation, OperationOutput};
use crate::services::math;
use crate::services::providers::TextProvider;

/// Run a validated operation. Only `Operation::Ai` touches the provider.
///
/// Fibonacci and prime filtering scale with the input, so they run on the
/// blocking pool instead of an async worker.
pub async fn execute(
    operation: Operation,
    text_provider: &dyn TextProvider,
) -> Result<OperationOutput, BfhlError> {
    match operation {
        Operation::Fibonacci(n) => {
            run_blocking(move || OperationOutput::Terms(math::fibonacci(n))).await
        }
        Operation::Prime(values) => {
            run_blocking(move || OperationOutput::Integers(math::filter_primes(&values))).await
        }
        Operation::Lcm(values) => math::lcm_all(&values)
            .map(OperationOutput::Number)
            .ok_or(BfhlError::InvalidInput("Invalid lcm input")),
        Operation::Hcf(values) => math::hcf_all(&values)
            .map(OperationOutput::Integer)
            .ok_or(BfhlError::InvalidInput("Invalid hcf input")),
        Operation::Ai(prompt) => {
            let answer = text_provider.complete(&prompt).await?;
            Ok(OperationOutput::Text(first_word(&answer).to_string()))
        }
    }
}

async fn run_blocking<F>(work: F) -> Result<OperationOutput, BfhlError>
where
    F: FnOnce() -> OperationOutput + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| BfhlError::TaskFailed(e.to_string()))
}

/// First whitespace-delimited token, or `""` for a blank answer.
pub fn first_word(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}
