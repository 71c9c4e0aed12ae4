//! Macro selection and draft composition.
//!
//! Composition is a pure function of the extracted fields, the issue label,
//! and a catalog. Bodies carry `[Name]`, `[ITIN]` and `[Hotel]`
//! placeholders; each is filled only when its field is present, so the agent
//! can see at a glance what still needs completing.

use serde::{Deserialize, Serialize};

use super::classifier::IssueLabel;
use super::fields::ExtractedFields;

pub const NAME_PLACEHOLDER: &str = "[Name]";
pub const ITINERARY_PLACEHOLDER: &str = "[ITIN]";
pub const HOTEL_PLACEHOLDER: &str = "[Hotel]";

/// A canned reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTemplate {
    pub key: String,
    pub title: String,
    pub body: String,
}

impl MacroTemplate {
    pub fn new(key: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Label-to-template routing with a fallback for unrouted labels.
#[derive(Debug, Clone)]
pub struct MacroCatalog {
    routes: Vec<(IssueLabel, MacroTemplate)>,
    default: MacroTemplate,
}

impl MacroCatalog {
    /// A catalog that routes nothing; every label gets `default`.
    pub fn new(default: MacroTemplate) -> Self {
        Self {
            routes: Vec::new(),
            default,
        }
    }

    /// The catalog shipped with the product.
    pub fn standard() -> Self {
        let dispute = standard::dispute_locked_charge_review();
        let refund = standard::refund_in_review_no_promise();
        let call_review = standard::call_review_verification();

        Self::new(standard::general_in_review())
            .with_template(IssueLabel::ChargebackDispute, dispute)
            .with_template(IssueLabel::RefundRequest, refund.clone())
            .with_template(IssueLabel::RefundWithBookingIssue, refund)
            .with_template(IssueLabel::HotelPayment, standard::vc_issue_in_progress())
            .with_template(IssueLabel::CallReview, call_review.clone())
            .with_template(IssueLabel::CallReviewWithAmenity, call_review)
    }

    /// Routes `label` to `template`, replacing any earlier route.
    pub fn with_template(mut self, label: IssueLabel, template: MacroTemplate) -> Self {
        self.routes.retain(|(routed, _)| *routed != label);
        self.routes.push((label, template));
        self
    }

    pub fn with_default(mut self, template: MacroTemplate) -> Self {
        self.default = template;
        self
    }

    pub fn select(&self, issue: Option<IssueLabel>) -> &MacroTemplate {
        issue
            .and_then(|label| {
                self.routes
                    .iter()
                    .find(|(routed, _)| *routed == label)
                    .map(|(_, template)| template)
            })
            .unwrap_or(&self.default)
    }

    pub fn default_template(&self) -> &MacroTemplate {
        &self.default
    }

    /// Every distinct template, routed ones first.
    pub fn templates(&self) -> Vec<&MacroTemplate> {
        let mut seen: Vec<&MacroTemplate> = Vec::new();
        for template in self
            .routes
            .iter()
            .map(|(_, template)| template)
            .chain(std::iter::once(&self.default))
        {
            if !seen.iter().any(|t| t.key == template.key) {
                seen.push(template);
            }
        }
        seen
    }
}

impl Default for MacroCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// The chosen macro with placeholders filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedDraft {
    pub macro_key: String,
    pub macro_title: String,
    pub body: String,
}

pub fn compose_draft(
    fields: &ExtractedFields,
    issue: Option<IssueLabel>,
    catalog: &MacroCatalog,
) -> ComposedDraft {
    let template = catalog.select(issue);

    let mut values: Vec<(&str, &str)> = Vec::with_capacity(3);
    if fields.has_guest_name() {
        values.push((NAME_PLACEHOLDER, fields.guest_name.as_str()));
    }
    if fields.has_itinerary() {
        values.push((ITINERARY_PLACEHOLDER, fields.itinerary.as_str()));
    }
    if fields.has_hotel_name() {
        values.push((HOTEL_PLACEHOLDER, fields.hotel_name.as_str()));
    }

    ComposedDraft {
        macro_key: template.key.clone(),
        macro_title: template.title.clone(),
        body: fill_placeholders(&template.body, &values),
    }
}

/// Single left-to-right pass, so substituted values are never rescanned.
fn fill_placeholders(body: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(start) = rest.find('[') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(placeholder, _)| tail.starts_with(placeholder)) {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            None => {
                out.push('[');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

mod standard {
    use super::MacroTemplate;

    pub fn dispute_locked_charge_review() -> MacroTemplate {
        MacroTemplate::new(
            "dispute_locked_charge_review",
            "Dispute / Chargeback → Refund Locked",
            "Dear [Name],

This response is related to your reservation for Itinerary # [ITIN].

We received a notification that the booking amount has been disputed through your card issuer. While a dispute is open, we are locked out of the refund process and must hold any action until the bank closes its review.

If you have documentation from your bank showing the dispute was closed or withdrawn, please reply with it so our Charge Review team can look at next steps.

Thank you for your patience.

Sincerely,
Hotel Reservations",
        )
    }

    pub fn refund_in_review_no_promise() -> MacroTemplate {
        MacroTemplate::new(
            "refund_in_review_no_promise",
            "Refund Request → In Review (No Promise)",
            "Dear [Name],

This response is related to your reservation for Itinerary # [ITIN].

We are in the process of reviewing your request. We will provide an update as soon as possible. If approved, refund timing depends on the payment method and bank processing.

Sincerely,
Travel Support",
        )
    }

    pub fn vc_issue_in_progress() -> MacroTemplate {
        MacroTemplate::new(
            "vc_issue_in_progress",
            "Hotel Needs Payment (VC) → In Progress",
            "Dear [Name],

This response is related to your reservation at [Hotel] for Itinerary # [ITIN].

We are reviewing the virtual card issue and coordinating internally. We will provide an update as soon as possible.

Sincerely,
Travel Support",
        )
    }

    pub fn call_review_verification() -> MacroTemplate {
        MacroTemplate::new(
            "call_review_verification",
            "Call Review → Verification In Progress",
            "Dear [Name],

This response is related to your reservation at [Hotel] for Itinerary # [ITIN].

We have received your request to review a call about this reservation. Our team is verifying the call details, and we will provide an update as soon as that review is complete.

Sincerely,
Travel Support",
        )
    }

    pub fn general_in_review() -> MacroTemplate {
        MacroTemplate::new(
            "general_in_review",
            "General Inquiry → In Review",
            "Dear [Name],

This response is related to your reservation at [Hotel] for Itinerary # [ITIN].

We have received your request and it is currently under review. We will provide an update as soon as possible. Thank you for your patience.

Sincerely,
Travel Support",
        )
    }
}
