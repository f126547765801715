use crate::a11y;
use crate::dom;
use crate::i18n::t;
use crate::transport::FetchTransport;
use promo_core::{SupportForm, SupportStatus, post_support};
use std::rc::Rc;
use yew::prelude::*;

/// How long the thank-you banner stays up.
const THANKS_VISIBLE_MS: i32 = 5_000;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub endpoint: AttrValue,
}

fn text_value(e: &InputEvent) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| {
            e.target_dyn_into::<web_sys::HtmlTextAreaElement>()
                .map(|area| area.value())
        })
}

enum SupportAction {
    Edit(fn(&mut SupportForm, &str), String),
    Replace(SupportForm),
    Succeeded,
    Failed,
    Dismiss,
}

/// Reducer wrapper so late events (the reply, the banner timeout) apply to
/// the latest form rather than a stale snapshot.
#[derive(Clone, PartialEq, Default)]
struct SupportState(SupportForm);

impl Reducible for SupportState {
    type Action = SupportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            SupportAction::Edit(apply, value) => apply(&mut form, &value),
            SupportAction::Replace(next) => form = next,
            SupportAction::Succeeded => form.complete_success(),
            SupportAction::Failed => form.complete_failure(),
            SupportAction::Dismiss => form.dismiss(),
        }
        Rc::new(Self(form))
    }
}

#[function_component(SupportFormView)]
pub fn support_form_view(p: &Props) -> Html {
    let state = use_reducer(SupportState::default);
    let validation = use_state(|| None::<String>);

    let edit = {
        let state = state.clone();
        let validation = validation.clone();
        move |apply: fn(&mut SupportForm, &str)| {
            let state = state.clone();
            let validation = validation.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(value) = text_value(&e) {
                    state.dispatch(SupportAction::Edit(apply, value));
                    validation.set(None);
                }
            })
        }
    };

    let on_submit = {
        let state = state.clone();
        let validation = validation.clone();
        let endpoint = p.endpoint.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = state.0.clone();
            let payload = match next.begin(&dom::current_path()) {
                Ok(payload) => payload,
                Err(err) => {
                    validation.set(Some(err.to_string()));
                    return;
                }
            };
            state.dispatch(SupportAction::Replace(next));
            let state = state.clone();
            let endpoint = endpoint.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match post_support(&FetchTransport, &endpoint, &payload).await {
                    Ok(_) => {
                        state.dispatch(SupportAction::Succeeded);
                        a11y::announce(&t("faq.thanks"));
                        dom::set_timeout(THANKS_VISIBLE_MS, move || {
                            state.dispatch(SupportAction::Dismiss);
                        });
                    }
                    Err(err) => {
                        log::error!("support request failed: {err}");
                        state.dispatch(SupportAction::Failed);
                    }
                }
            });
        })
    };

    let form = &state.0;
    let busy = form.is_submitting();
    html! {
        <section class="support-form max-w-xl mx-auto my-12" aria-labelledby="support-title">
            <h2 id="support-title" class="text-2xl font-bold uppercase mb-2">{ t("faq.ask_title") }</h2>
            <p class="mb-6 text-sm">{ t("faq.ask_body") }</p>
            if form.status() == SupportStatus::Sent {
                <div class="bg-green-100 border border-green-600 rounded p-3 mb-4" role="status">{ t("faq.thanks") }</div>
            }
            if let Some(message) = form.error_message() {
                <div class="bg-red-100 border border-red-600 rounded p-3 mb-4" role="alert">{ message }</div>
            }
            if let Some(message) = (*validation).clone() {
                <p class="text-red-600 text-sm mb-4" role="alert">{ message }</p>
            }
            <form novalidate=true onsubmit={on_submit} aria-busy={busy.to_string()}>
                <label for="support-name" class="block text-sm font-semibold mb-1">{ t("faq.name") }</label>
                <input id="support-name" type="text" class="w-full border rounded p-2 mb-4" required=true
                    value={form.name.clone()} disabled={busy} oninput={edit(SupportForm::set_name)} />
                <label for="support-email" class="block text-sm font-semibold mb-1">{ t("faq.email") }</label>
                <input id="support-email" type="email" class="w-full border rounded p-2 mb-4" required=true
                    value={form.email.clone()} disabled={busy} oninput={edit(SupportForm::set_email)} />
                <label for="support-question" class="block text-sm font-semibold mb-1">{ t("faq.question") }</label>
                <textarea id="support-question" rows="4" class="w-full border rounded p-2 mb-4" required=true
                    value={form.question.clone()} disabled={busy} oninput={edit(SupportForm::set_question)} />
                <button type="submit" class="bg-[#011e5b] text-white font-bold uppercase rounded px-8 py-2 disabled:opacity-50" disabled={busy}>
                    { if busy { t("faq.sending") } else { t("faq.send") } }
                </button>
            </form>
        </section>
    }
}
