//! Server-rendered HTML pages
//!
//! 只有跳转流程需要的几个页面：首页、密码页、404、410。

use actix_web::HttpResponse;
use actix_web::http::StatusCode;

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:32rem;margin:4rem auto;padding:0 1rem;color:#222}\
input,button{font:inherit;padding:.5rem;margin:.25rem 0;width:100%;box-sizing:border-box}\
.error{color:#b00020}";

/// 转义 HTML 特殊字符
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
<title>{title}</title><style>{STYLE}</style></head><body>{body}</body></html>",
        title = escape_html(title),
    )
}

fn html(status: StatusCode, page: String) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(("Content-Type", "text/html; charset=utf-8"))
        .insert_header(("Cache-Control", "no-store"))
        .body(page)
}

pub fn landing_page() -> HttpResponse {
    let body = r#"<h1>linkgate</h1>
<form id="shorten">
<input name="url" type="url" placeholder="https://example.com/very/long/path" required>
<input name="alias" placeholder="Custom alias (optional)">
<input name="password" type="password" placeholder="Password (optional)">
<input name="expires_at" type="datetime-local">
<button type="submit">Shorten</button>
</form>
<p id="result"></p>
<script>
document.getElementById('shorten').addEventListener('submit', async (e) => {
  e.preventDefault();
  const data = Object.fromEntries(new FormData(e.target));
  for (const k of Object.keys(data)) if (!data[k]) delete data[k];
  const res = await fetch('/shorten', {method: 'POST', headers: {'Content-Type': 'application/json'}, body: JSON.stringify(data)});
  const json = await res.json();
  document.getElementById('result').textContent = res.ok ? json.short_url : json.error;
});
</script>"#;
    html(StatusCode::OK, layout("linkgate", body))
}

/// 密码输入页；`rejected` 为真时附带错误提示并返回 401
pub fn password_page(hash: &str, rejected: bool) -> HttpResponse {
    let hash = escape_html(hash);
    let error = if rejected {
        "<p class=\"error\">Incorrect password</p>"
    } else {
        ""
    };
    let body = format!(
        "<h1>Protected link</h1><p>Enter the password to continue to <code>/{hash}</code>.</p>{error}\
<form method=\"post\" action=\"/{hash}\">\
<input name=\"password\" type=\"password\" autofocus required>\
<button type=\"submit\">Unlock</button></form>"
    );

    let status = if rejected {
        StatusCode::UNAUTHORIZED
    } else {
        StatusCode::OK
    };
    html(status, layout("Protected link", &body))
}

pub fn not_found_page() -> HttpResponse {
    html(
        StatusCode::NOT_FOUND,
        layout("Not found", "<h1>404</h1><p>This short link does not exist.</p>"),
    )
}

pub fn expired_page() -> HttpResponse {
    html(
        StatusCode::GONE,
        layout("Link expired", "<h1>410</h1><p>This short link has expired.</p>"),
    )
}

pub fn error_page() -> HttpResponse {
    html(
        StatusCode::INTERNAL_SERVER_ERROR,
        layout("Error", "<h1>500</h1><p>Something went wrong.</p>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">'&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_password_page_status() {
        assert_eq!(password_page("abc123", false).status(), StatusCode::OK);
        assert_eq!(password_page("abc123", true).status(), StatusCode::UNAUTHORIZED);
    }
}
