use crate::context::AppContext;
use crate::domain::GenerationOutcome;
use crate::error::{AppError, AppResult};
use crate::session::SessionState;

/// Drives one generation attempt against the session: snapshots the prompt,
/// dispatches it, and records the terminal outcome. Returns `Ok(None)` when
/// the trigger was ignored because an attempt is already in flight; a closed
/// form gate is an `InvalidForm` error instead.
pub async fn run_generation(
    ctx: &AppContext,
    session: &mut SessionState,
) -> AppResult<Option<GenerationOutcome>> {
    let request = match session.begin_generation() {
        Some(request) => request,
        None if session.is_generating() => {
            log::warn!("generation already in flight, ignoring trigger");
            return Ok(None);
        }
        None => {
            let missing = session.form().missing_required().join(", ");
            return Err(AppError::InvalidForm(format!(
                "missing required fields: {missing}"
            )));
        }
    };

    log::info!("requesting release announcement generation");
    let outcome = match ctx.generator.generate(&request).await {
        Ok(text) => GenerationOutcome::Message(text),
        Err(error) => {
            log::warn!("generation attempt failed: {error}");
            GenerationOutcome::Failed(error.to_string())
        }
    };

    session.complete_generation(outcome.clone());
    Ok(Some(outcome))
}
