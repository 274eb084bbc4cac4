use std::sync::Arc;

use safe_scan::assessment::{
    catalog, AnswerValue, AssessmentService, FileSlots, JsonSlotRepository,
};
use safe_scan::config::StorageConfig;

pub(crate) type FileAssessmentService = AssessmentService<JsonSlotRepository<FileSlots>>;

pub(crate) fn file_service(storage: &StorageConfig) -> FileAssessmentService {
    let repository = Arc::new(JsonSlotRepository::in_dir(&storage.data_dir));
    AssessmentService::new(repository)
}

/// Parse a `key=value` checklist answer, accepting only catalog keys and their domain's values.
pub(crate) fn parse_answer(raw: &str) -> Result<(String, AnswerValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    let item = catalog::item(key).ok_or_else(|| {
        let known: Vec<_> = catalog::items().iter().map(|item| item.key).collect();
        format!("unknown checklist item '{key}' (known: {})", known.join(", "))
    })?;

    let value = AnswerValue::parse(value.trim());
    if !item.domain.accepts(&value) {
        let allowed: Vec<_> = item.domain.options().iter().map(AnswerValue::as_str).collect();
        return Err(format!(
            "'{value}' is not a valid answer for {key} (allowed: {})",
            allowed.join(", ")
        ));
    }

    Ok((item.key.to_string(), value))
}
