//! The popup page that hands the token to the CMS window.
//!
//! Protocol: the popup announces `authorizing:<provider>` to its opener, waits
//! for the opener to answer, then replies with
//! `authorization:<provider>:<success|error>:<json>` to the answering origin.

use serde_json::json;

use crate::utils::script::{js_string_array, js_string_literal};

pub fn success_message(provider: &str, token: &str) -> String {
    format!(
        "authorization:{}:success:{}",
        provider,
        json!({ "token": token })
    )
}

pub fn error_message(provider: &str, reason: &str) -> String {
    format!(
        "authorization:{}:error:{}",
        provider,
        json!({ "message": reason })
    )
}

/// `allowed_origins` empty means any opener origin may receive the reply.
pub fn render_page(provider: &str, message: &str, allowed_origins: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Authorizing Decap...</title>
    <script>
      (function () {{
        if (!window.opener) {{
          return;
        }}
        var allowedOrigins = {origins};
        var message = {message};
        var receiveMessage = function (event) {{
          if (allowedOrigins.length && allowedOrigins.indexOf(event.origin) === -1) {{
            return;
          }}
          window.opener.postMessage(message, event.origin);
          window.removeEventListener("message", receiveMessage, false);
        }};
        window.addEventListener("message", receiveMessage, false);
        window.opener.postMessage({handshake}, "*");
      }})();
    </script>
  </head>
  <body>
    <p>Authorizing Decap...</p>
  </body>
</html>
"#,
        origins = js_string_array(allowed_origins),
        message = js_string_literal(message),
        handshake = js_string_literal(&format!("authorizing:{provider}")),
    )
}
