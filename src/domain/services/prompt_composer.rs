use crate::domain::SupportCategory;

const NO_DESCRIPTION: &str = "No description provided";

/// Builds the prompts sent to the generation service.
///
/// Pure string assembly: no I/O and no failure modes. Greeting detection and
/// the three-section answer layout are left to the model; the prompts only
/// ask for them.
pub struct PromptComposer;

impl PromptComposer {
    /// Preamble for a raw option key. Unknown or missing keys get the general
    /// customer-service preamble.
    pub fn select_context(category: Option<&str>) -> &'static str {
        SupportCategory::from_option(category).preamble()
    }

    pub fn compose_text_prompt(context: &str, message: &str) -> String {
        format!(
            "{context}\n\n\
             Customer: {message}\n\n\
             Respond naturally as a helpful customer service agent. If this is a greeting, \
             welcome the customer and ask how you can help them today."
        )
    }

    pub fn compose_image_prompt(
        context: &str,
        message: &str,
        image_description: Option<&str>,
    ) -> String {
        let description = image_description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION);

        format!(
            "{context}\n\n\
             Customer's Description: {description}\n\
             Customer's Query: {message}\n\n\
             Please analyze the image and provide:\n\
             1. Issue Identification\n\
             2. Detailed Analysis\n\
             3. Recommended Solutions"
        )
    }
}
