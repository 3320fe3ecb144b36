use crate::error::Error;

/// Returns the trimmed text, or `InvalidPayload` if nothing is left.
pub fn validate_text(text: &str) -> Result<&str, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::InvalidPayload("text is empty".to_owned()));
    }
    Ok(text)
}

pub fn validate_length(text: &str, max_chars: usize) -> Result<(), Error> {
    let len = text.chars().count();
    if len > max_chars {
        return Err(Error::InvalidPayload(format!(
            "text is {len} characters long, the limit is {max_chars}"
        )));
    }
    Ok(())
}

pub fn validate_batch<S>(batch: &[S]) -> Result<(), Error> {
    if batch.is_empty() {
        return Err(Error::InvalidPayload("batch is empty".to_owned()));
    }
    Ok(())
}
