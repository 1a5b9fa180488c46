//! Recommendation wizard actions.

use crate::dom::{self, WizardElements};
use crate::state;
use eq_wizard::{
    ContactDetails, Recommendation, ValidatedInput, WizardInput, compose_message, email_body,
    mailto_link, messaging_link,
};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

fn read_input(els: &WizardElements) -> WizardInput {
    WizardInput {
        space: els.space.value(),
        goal: els.goal.value(),
        current_equipment: els.equipment.value(),
    }
}

fn validated(els: &WizardElements) -> Option<ValidatedInput> {
    match read_input(els).validate() {
        Ok(input) => Some(input),
        Err(err) => {
            debug!("wizard not submitted: {}", err);
            if let Ok(form) = els.form.clone().dyn_into::<HtmlFormElement>() {
                form.report_validity();
            }
            None
        }
    }
}

fn render_result(els: &WizardElements, rec: &Recommendation) {
    els.kit.set_inner_html("");
    for item in &rec.kit {
        if let Some(li) = dom::create_element("li") {
            dom::set_text(&li, item);
            let _ = els.kit.append_child(&li);
        }
    }
    dom::set_text(&els.focus, &rec.focus);
    dom::set_text(&els.note, &rec.note);
    let _ = els.result.remove_attribute("hidden");
    dom::add_class(&els.result, "show");
}

/// Show the recommendation and open the messaging deep link in a new context.
pub fn submit_to_messaging(els: &WizardElements) {
    let Some(input) = validated(els) else {
        return;
    };
    let rec = input.recommend();
    render_result(els, &rec);

    let url = messaging_link(&state::config(), &compose_message(&input, &rec));
    info!("opening messaging link for {}", input.space());
    if let Err(err) = dom::window().open_with_url_and_target_and_features(&url, "_blank", "noopener") {
        warn!("window.open failed: {:?}", err);
    }
}

/// Hand the same message to the mail composer, with the optional sender
/// details on top.
pub fn submit_by_email(els: &WizardElements) {
    let Some(input) = validated(els) else {
        return;
    };
    let rec = input.recommend();
    let contact = ContactDetails {
        name: els.name.as_ref().map(|n| n.value()).unwrap_or_default(),
        email: els.email.as_ref().map(|e| e.value()).unwrap_or_default(),
    };
    let body = email_body(&contact, &compose_message(&input, &rec));
    let url = mailto_link(&state::config(), &body);
    if let Err(err) = dom::window().location().set_href(&url) {
        warn!("mailto navigation failed: {:?}", err);
    }
}
