//! The one prompt template shared by all backends.

pub(crate) const SYSTEM_PROMPT: &str = "You are a compassionate quote generator. \
Create short, uplifting quotes (1-2 sentences max) that speak directly to how \
someone is feeling. Be warm and encouraging. Only output the quote itself, no \
preamble or explanation.";

pub(crate) fn user_prompt(feeling: &str) -> String {
    format!("Create an uplifting quote for someone feeling: {feeling}")
}

/// Single-string variant for text-completion style backends.
pub(crate) fn inference_prompt(feeling: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\n{}", user_prompt(feeling))
}

#[cfg(test)]
mod tests {
    use super::{inference_prompt, user_prompt};

    #[test]
    fn feeling_is_interpolated_verbatim() {
        assert!(user_prompt("quietly hopeful").ends_with("feeling: quietly hopeful"));
    }

    #[test]
    fn inference_prompt_carries_both_parts() {
        let prompt = inference_prompt("tired");
        assert!(prompt.contains("compassionate quote generator"));
        assert!(prompt.ends_with("feeling: tired"));
    }
}
