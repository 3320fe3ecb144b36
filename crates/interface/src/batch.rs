use crate::{error::Error, payload::validate_batch};

/// One entry of a batch translated with [`run_collecting`].
#[derive(Debug)]
pub struct BatchItem {
    pub index: usize,
    pub input: String,
    pub result: Result<String, Error>,
}

/// Translates every text in order and stops at the first failure.
pub fn run<F>(batch: &[String], mut translate: F) -> Result<Vec<String>, Error>
where
    F: FnMut(&str) -> Result<String, Error>,
{
    validate_batch(batch)?;
    let mut out = Vec::with_capacity(batch.len());
    for (i, text) in batch.iter().enumerate() {
        out.push(translate(text)?);
        log::debug!("batch item {} of {} translated", i + 1, batch.len());
    }
    Ok(out)
}

/// Like [`run`], but keeps going after a failure and reports every item.
pub fn run_collecting<F>(batch: &[String], mut translate: F) -> Result<Vec<BatchItem>, Error>
where
    F: FnMut(&str) -> Result<String, Error>,
{
    validate_batch(batch)?;
    Ok(batch
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let result = translate(text);
            if let Err(e) = &result {
                log::warn!("batch item {} failed: {e}", index + 1);
            }
            BatchItem {
                index,
                input: text.clone(),
                result,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(items: &[&str]) -> Vec<String> {
        items.iter().map(|v| v.to_string()).collect()
    }

    fn upper(text: &str) -> Result<String, Error> {
        match text {
            "bad" => Err(Error::TranslationNotFound(text.to_owned())),
            _ => Ok(text.to_uppercase()),
        }
    }

    #[test]
    fn keeps_order() {
        let out = run(&batch(&["a", "b", "c"]), upper).unwrap();
        assert_eq!(out, vec!["A", "B", "C"]);
    }

    #[test]
    fn aborts_on_first_failure() {
        let mut seen = Vec::new();
        let res = run(&batch(&["a", "bad", "c"]), |t| {
            seen.push(t.to_owned());
            upper(t)
        });
        assert!(matches!(res, Err(Error::TranslationNotFound(t)) if t == "bad"));
        assert_eq!(seen, vec!["a", "bad"]);
    }

    #[test]
    fn empty_batch_is_invalid() {
        let mut called = false;
        let res = run(&[], |t| {
            called = true;
            upper(t)
        });
        assert!(matches!(res, Err(Error::InvalidPayload(_))));
        assert!(!called);
        assert!(matches!(
            run_collecting(&[], upper),
            Err(Error::InvalidPayload(_))
        ));
    }

    #[test]
    fn collecting_reports_every_item() {
        let items = run_collecting(&batch(&["a", "bad", "c"]), upper).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].result.as_deref().unwrap(), "A");
        assert!(items[1].result.is_err());
        assert_eq!(items[1].input, "bad");
        assert_eq!(items[2].index, 2);
        assert_eq!(items[2].result.as_deref().unwrap(), "C");
    }
}
