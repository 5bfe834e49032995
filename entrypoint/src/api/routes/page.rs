use axum::response::Html;
use common::constants::{EMAIL_INPUT_ID, MESSAGE_INPUT_ID, NAME_INPUT_ID, SUBMIT_CONTROL_ID};

pub(crate) async fn page_handler() -> Html<String> {
    Html(render_contact_page())
}

pub(crate) fn render_contact_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Contact</title>
</head>
<body>
<form id="contact_form" onsubmit="return false;">
<input id="{NAME_INPUT_ID}" type="text" placeholder="Name" required>
<input id="{EMAIL_INPUT_ID}" type="email" placeholder="Email" required>
<textarea id="{MESSAGE_INPUT_ID}" placeholder="Message" required></textarea>
<button id="{SUBMIT_CONTROL_ID}" type="button">Send</button>
</form>
<script>
document.getElementById("{SUBMIT_CONTROL_ID}").addEventListener("click", async () => {{
  const value = (id) => document.getElementById(id).value;
  const response = await fetch("/contact", {{
    method: "POST",
    headers: {{ "Content-Type": "application/json" }},
    body: JSON.stringify({{
      {NAME_INPUT_ID}: value("{NAME_INPUT_ID}"),
      {EMAIL_INPUT_ID}: value("{EMAIL_INPUT_ID}"),
      {MESSAGE_INPUT_ID}: value("{MESSAGE_INPUT_ID}"),
    }}),
  }});
  if (!response.ok) return;
  const actions = await response.json();
  actions.notifications.forEach((notification) => alert(notification));
  if (actions.reload) location.reload();
}});
</script>
</body>
</html>
"#
    )
}
