/// スキル名の正規形（前後空白の除去 + 小文字化）。
///
/// Every insertion into a skill profile and every requirement lookup goes
/// through this function, so "Java", " java " and "JAVA" are one skill.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Normalize a skill name and reject it when nothing is left.
pub(crate) fn normalize_non_empty(skill: &str) -> Option<String> {
    let normalized = normalize_skill(skill);
    (!normalized.is_empty()).then_some(normalized)
}
