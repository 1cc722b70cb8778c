//! # 출력 이스케이프(sanitize) 서비스
//!
//! 사용자가 입력한 텍스트(폴더 이름, 노트 이름/내용)는 DB에 원본 그대로 저장하고,
//! **응답으로 내보낼 때마다** 이 모듈을 거쳐 이스케이프합니다.
//!
//! 태그를 여는/닫는 `<`, `>`만 엔티티로 바꿉니다.
//! 따옴표와 `&`는 그대로 둡니다. 그래서 `<script>alert("xss");</script>`는
//! `&lt;script&gt;alert("xss");&lt;/script&gt;`가 됩니다.
//! `&`를 건드리지 않으므로 이미 이스케이프된 문자열을 다시 통과시켜도 결과가 같습니다(멱등).

/// `<` → `&lt;`, `>` → `&gt;`로 바꾼 새 문자열을 반환합니다.
pub fn escape_html(input: &str) -> String {
    // 바꿀 문자가 없으면 할당 한 번으로 끝납니다.
    if !input.contains(['<', '>']) {
        return input.to_string();
    }

    let mut escaped = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
