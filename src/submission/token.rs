use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const TOKEN_LENGTH: usize = 16;

/// Low-assurance form token: base64 of tournament id, email and send time,
/// with `+`, `/` and `=` removed, cut to 16 characters.
///
/// Built from public values, so it only deters naive bots.
pub fn form_token(tournament_id: &str, email: &str, sent_at_millis: i64) -> String {
    let raw = format!("{}{}{}", tournament_id, email, sent_at_millis);
    STANDARD
        .encode(raw)
        .chars()
        .filter(|c| !matches!(c, '+' | '/' | '='))
        .take(TOKEN_LENGTH)
        .collect()
}
