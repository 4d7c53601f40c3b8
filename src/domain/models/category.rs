use serde::{Deserialize, Serialize};

const TECHNICAL_PREAMBLE: &str = "\
You are a friendly technical support specialist.
Be conversational and helpful.
Focus on solving technical issues in a clear, step-by-step manner.
Ask for specific details when needed.";

const ORDER_PREAMBLE: &str = "\
You are a friendly order tracking specialist.
Be conversational and helpful.
Focus on order status and shipping queries.
Ask for order numbers when needed.";

const REFUND_PREAMBLE: &str = "\
You are a friendly refunds and returns specialist.
Be conversational and helpful.
Focus on guiding customers through the refund process.
Explain policies clearly and simply.";

const BILLING_PREAMBLE: &str = "\
You are a friendly billing support specialist.
Be conversational and helpful.
Focus on resolving payment and billing issues.
Keep responses clear and secure.";

const GENERAL_PREAMBLE: &str = "\
You are a friendly customer service AI assistant.
Be conversational and natural in your responses.
Avoid numbered lists unless specifically needed.
Keep responses helpful but casual.
If the customer just says hi or hello, respond naturally and ask how you can help.";

/// Support topic a customer picked in the chat widget.
///
/// `General` is the fallback for requests without an option or with a key
/// outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportCategory {
    Technical,
    Order,
    Refund,
    Billing,
    #[default]
    General,
}

impl SupportCategory {
    /// Exact, case-sensitive lookup of one of the four option keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "technical" => Some(SupportCategory::Technical),
            "order" => Some(SupportCategory::Order),
            "refund" => Some(SupportCategory::Refund),
            "billing" => Some(SupportCategory::Billing),
            _ => None,
        }
    }

    pub fn from_option(option: Option<&str>) -> Self {
        option.and_then(Self::from_key).unwrap_or_default()
    }

    pub fn preamble(&self) -> &'static str {
        match self {
            SupportCategory::Technical => TECHNICAL_PREAMBLE,
            SupportCategory::Order => ORDER_PREAMBLE,
            SupportCategory::Refund => REFUND_PREAMBLE,
            SupportCategory::Billing => BILLING_PREAMBLE,
            SupportCategory::General => GENERAL_PREAMBLE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportCategory::Technical => "technical",
            SupportCategory::Order => "order",
            SupportCategory::Refund => "refund",
            SupportCategory::Billing => "billing",
            SupportCategory::General => "general",
        }
    }
}

impl std::fmt::Display for SupportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
