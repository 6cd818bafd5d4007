//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 회원가입 요청의 "필드 부재" 규칙(없음/`null`/빈 문자열/공백만 있음)을
//! 구현하는 기반이 됩니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 인자
/// * `value` - 정리할 Option<String>
///
/// # 반환값
/// * `None` - 값이 없거나 빈 문자열인 경우
/// * `Some(String)` - 정리된 유효한 문자열
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 인자
/// * `value` - 확인할 문자열
///
/// # 반환값
/// * `true` - 유효한 문자열
/// * `false` - 빈 문자열이거나 공백만 있는 경우
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// serde의 `#[serde(deserialize_with = "deserialize_optional_string")]` 속성과 함께 사용됩니다.
///
/// # 인자
/// * `deserializer` - serde deserializer 인스턴스
///
/// # 반환값
/// * `Ok(Some(String))` - 유효한 문자열 (앞뒤 공백 제거됨)
/// * `Ok(None)` - null 값, 빈 문자열, 또는 공백만 있는 경우
/// * `Err(D::Error)` - 역직렬화 실패 시
///
/// # 예제
/// ```rust,ignore
/// use serde::Deserialize;
/// use crate::utils::string_utils::deserialize_optional_string;
///
/// #[derive(Deserialize)]
/// struct SignUpRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     name: Option<String>,
/// }
///
/// // JSON: {"name": "  Alice  "} → Some("Alice")
/// // JSON: {"name": ""} → None
/// // JSON: {"name": null} → None
/// // JSON: {"name": "   "} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
