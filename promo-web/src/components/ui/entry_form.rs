use super::confirmation::Confirmation;
use crate::a11y;
use crate::dom;
use crate::i18n::t;
use crate::storage::BrowserStore;
use crate::transport::FetchTransport;
use chrono::Datelike;
use promo_core::{
    ALL_STATES, ClientContext, EntryForm, EntryPhase, Field, FileMeta, LegalCopy, Promotion,
    post_entry,
};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Promotion being entered; `None` enters the house sweepstakes.
    #[prop_or_default]
    pub promotion: Option<Promotion>,
    pub legal: LegalCopy,
    pub endpoint: AttrValue,
    /// Reveal the official rules panel.
    pub on_show_rules: Callback<()>,
    pub faq_href: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
struct FieldProps {
    field: Field,
    label: AttrValue,
    value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    input_type: AttrValue,
    #[prop_or_default]
    placeholder: Option<AttrValue>,
    #[prop_or_default]
    hint: Option<AttrValue>,
    #[prop_or_default]
    error: Option<AttrValue>,
    disabled: bool,
    oninput: Callback<InputEvent>,
}

fn error_id(field: Field) -> String {
    format!("{}-error", field.input_id())
}

#[function_component(TextField)]
fn text_field(p: &FieldProps) -> Html {
    let id = p.field.input_id();
    let described_by = p.error.as_ref().map(|_| error_id(p.field));
    html! {
        <div class="mb-4">
            <label for={id} class="block text-sm font-semibold mb-1">{ p.label.clone() }{" *"}</label>
            <input
                id={id}
                name={id}
                type={p.input_type.clone()}
                class={classes!("w-full", "border", "rounded", "p-2", p.error.is_some().then_some("border-red-600"))}
                value={p.value.clone()}
                placeholder={p.placeholder.clone()}
                disabled={p.disabled}
                required=true
                aria-invalid={p.error.is_some().to_string()}
                aria-describedby={described_by.clone()}
                oninput={p.oninput.clone()}
            />
            if let Some(hint) = &p.hint {
                <p class="text-xs text-gray-600 mt-1">{ hint.clone() }</p>
            }
            if let (Some(err), Some(err_id)) = (&p.error, described_by) {
                <p id={err_id} class="text-red-600 text-sm mt-1" role="alert">{ err.clone() }</p>
            }
        </div>
    }
}

fn field_error(form: &EntryForm, field: Field) -> Option<AttrValue> {
    form.error(field).map(|err| AttrValue::from(err.to_string()))
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}

fn checkbox_checked(e: &Event) -> Option<bool> {
    e.target_dyn_into::<web_sys::HtmlInputElement>()
        .map(|input| input.checked())
}

#[cfg(target_arch = "wasm32")]
fn file_meta(file: &web_sys::File) -> FileMeta {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size() as u64;
    FileMeta::new(file.name(), size, file.type_())
}

/// First file chosen through the picker. The input is cleared so the same
/// file can be picked again after a rejection.
fn picked_file(e: &Event) -> Option<FileMeta> {
    #[cfg(target_arch = "wasm32")]
    {
        let input = e.target_dyn_into::<web_sys::HtmlInputElement>()?;
        let meta = input.files()?.get(0).map(|file| file_meta(&file));
        input.set_value("");
        meta
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = e;
        None
    }
}

fn dropped_file(e: &DragEvent) -> Option<FileMeta> {
    #[cfg(target_arch = "wasm32")]
    {
        let file = e.data_transfer()?.files()?.get(0)?;
        Some(file_meta(&file))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = e;
        None
    }
}

fn client_context() -> ClientContext {
    ClientContext::new(
        dom::user_agent(),
        dom::current_path(),
        dom::referrer(),
        dom::now_utc(),
        dom::today().year(),
    )
}

/// Sweepstakes entry form. Switches to the confirmation view once the entry
/// API accepts a submission.
#[function_component(EntryFormView)]
pub fn entry_form_view(p: &Props) -> Html {
    let form = use_state(EntryForm::new);

    if let EntryPhase::Confirmed { reference_id } = form.phase() {
        let on_another = {
            let form = form.clone();
            Callback::from(move |()| {
                let mut next = (*form).clone();
                next.start_another();
                form.set(next);
            })
        };
        return html! {
            <Confirmation
                reference_id={reference_id.clone()}
                faq_href={p.faq_href.clone()}
                on_another={on_another}
            />
        };
    }

    let edit = {
        let form = form.clone();
        move |apply: fn(&mut EntryForm, &str)| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(value) = input_value(&e) {
                    let mut next = (*form).clone();
                    apply(&mut next, &value);
                    form.set(next);
                }
            })
        }
    };
    let toggle = {
        let form = form.clone();
        move |apply: fn(&mut EntryForm, bool)| {
            let form = form.clone();
            Callback::from(move |e: Event| {
                if let Some(checked) = checkbox_checked(&e) {
                    let mut next = (*form).clone();
                    apply(&mut next, checked);
                    form.set(next);
                }
            })
        }
    };

    let on_state = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.set_state(&sel.value());
                form.set(next);
            }
        })
    };
    let attach = {
        let form = form.clone();
        Callback::from(move |meta: FileMeta| {
            let mut next = (*form).clone();
            if !next.select_file(meta) {
                a11y::announce(&field_error(&next, Field::File).unwrap_or_default());
            }
            form.set(next);
        })
    };
    let on_file = {
        let attach = attach.clone();
        Callback::from(move |e: Event| {
            if let Some(meta) = picked_file(&e) {
                attach.emit(meta);
            }
        })
    };
    let on_drag_over = Callback::from(|e: DragEvent| e.prevent_default());
    let on_drop = Callback::from(move |e: DragEvent| {
        e.prevent_default();
        if let Some(meta) = dropped_file(&e) {
            attach.emit(meta);
        }
    });
    let on_remove_file = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.remove_file();
            form.set(next);
        })
    };
    let on_rules_link = {
        let cb = p.on_show_rules.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let on_submit = {
        let form = form.clone();
        let promotion = p.promotion.clone();
        let legal = p.legal.clone();
        let endpoint = p.endpoint.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let ctx = client_context();
            let Some(payload) = next.prepare_submission(promotion.as_ref(), &legal, &ctx) else {
                if let Some(field) = next.errors().keys().next() {
                    a11y::focus_id(field.input_id());
                }
                form.set(next);
                return;
            };
            form.set(next.clone());
            let form = form.clone();
            let promotion = promotion.clone();
            let endpoint = endpoint.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let store = BrowserStore::open();
                match post_entry(&FetchTransport, &endpoint, &payload).await {
                    Ok(reply) => {
                        let reference =
                            next.complete_success(&reply, &store, promotion.as_ref(), dom::now_utc());
                        log::info!("entry accepted: {reference}");
                        a11y::announce(&t("confirm.title"));
                        dom::scroll_to_top();
                    }
                    Err(err) => {
                        let message =
                            next.complete_failure(&err, &store, promotion.as_ref(), dom::now_utc());
                        a11y::announce(&message);
                    }
                }
                form.set(next);
            });
        })
    };

    let data = form.data();
    let busy = form.is_submitting();
    let state_error = field_error(&form, Field::State);
    let file_error = field_error(&form, Field::File);
    let rules_error = field_error(&form, Field::AcceptRules);
    let privacy_error = field_error(&form, Field::AcceptPrivacy);

    html! {
        <form class="entry-form max-w-xl mx-auto" novalidate=true onsubmit={on_submit} aria-busy={busy.to_string()}>
            <h2 class="text-2xl font-bold uppercase mb-6">{ t("entry.heading") }</h2>
            if let Some(message) = form.api_error() {
                <div class="bg-red-100 border border-red-600 text-red-700 rounded p-3 mb-4" role="alert">
                    { message.to_string() }
                </div>
            }
            <TextField
                field={Field::FirstName}
                label={t("entry.first_name")}
                value={data.first_name.clone()}
                error={field_error(&form, Field::FirstName)}
                disabled={busy}
                oninput={edit(EntryForm::set_first_name)}
            />
            <TextField
                field={Field::LastName}
                label={t("entry.last_name")}
                value={data.last_name.clone()}
                error={field_error(&form, Field::LastName)}
                disabled={busy}
                oninput={edit(EntryForm::set_last_name)}
            />
            <TextField
                field={Field::YearBorn}
                label={t("entry.year_born")}
                value={data.year_born.clone()}
                input_type="number"
                placeholder="YYYY"
                error={field_error(&form, Field::YearBorn)}
                disabled={busy}
                oninput={edit(EntryForm::set_year_born)}
            />
            <div class="mb-4">
                <label for={Field::State.input_id()} class="block text-sm font-semibold mb-1">{ t("entry.state") }{" *"}</label>
                <select
                    id={Field::State.input_id()}
                    name={Field::State.input_id()}
                    class="w-full border rounded p-2"
                    disabled={busy}
                    aria-invalid={state_error.is_some().to_string()}
                    onchange={on_state}
                >
                    <option value="" selected={data.state.is_empty()}>{ t("entry.state_placeholder") }</option>
                    { for ALL_STATES.iter().map(|state| html! {
                        <option value={state.name} selected={data.state == state.name}>{ state.name }</option>
                    }) }
                </select>
                if let Some(err) = state_error {
                    <p id={error_id(Field::State)} class="text-red-600 text-sm mt-1" role="alert">{ err }</p>
                }
            </div>
            <TextField
                field={Field::Email}
                label={t("entry.email")}
                value={data.email.clone()}
                input_type="email"
                error={field_error(&form, Field::Email)}
                disabled={busy}
                oninput={edit(EntryForm::set_email)}
            />
            <TextField
                field={Field::Phone}
                label={t("entry.phone")}
                value={data.phone.clone()}
                input_type="tel"
                placeholder={t("entry.phone_placeholder")}
                hint={t("entry.phone_format")}
                error={field_error(&form, Field::Phone)}
                disabled={busy}
                oninput={edit(EntryForm::set_phone)}
            />

            <div class="mb-4">
                <label for={Field::File.input_id()} class="block text-sm font-semibold mb-1">
                    { t("entry.upload") }{" "}<span class="font-normal text-gray-600">{ t("entry.upload_hint") }</span>
                </label>
                if let Some(file) = &data.file {
                    <div class="flex items-center justify-between border rounded p-3 bg-green-50">
                        <div>
                            <p class="text-sm font-semibold">{ t("entry.file_selected") }</p>
                            <p class="text-xs">{ file.name.clone() }</p>
                        </div>
                        <button type="button" class="text-sm underline" disabled={busy} onclick={on_remove_file}>
                            { t("entry.remove") }
                        </button>
                    </div>
                } else {
                    <div class="border-2 border-dashed rounded p-6 text-center" ondragover={on_drag_over} ondrop={on_drop}>
                        <input
                            id={Field::File.input_id()}
                            type="file"
                            class="sr-only"
                            accept=".pdf,.jpg,.jpeg,.png"
                            disabled={busy}
                            onchange={on_file}
                        />
                        <label for={Field::File.input_id()} class="cursor-pointer underline">{ t("entry.choose_file") }</label>
                        <p class="text-xs text-gray-600">{ t("entry.drag_drop") }</p>
                    </div>
                }
                <p class="text-xs text-gray-600 mt-1">{ t("entry.formats") }</p>
                if let Some(err) = file_error {
                    <p id={error_id(Field::File)} class="text-red-600 text-sm mt-1" role="alert">{ err }</p>
                }
            </div>

            <div class="mb-3 flex items-start gap-2">
                <input
                    id={Field::AcceptRules.input_id()}
                    type="checkbox"
                    checked={data.accept_rules}
                    disabled={busy}
                    onchange={toggle(EntryForm::set_accept_rules)}
                />
                <label for={Field::AcceptRules.input_id()} class="text-sm">
                    { t("entry.rules_prefix") }{" "}
                    <a href="#official-rules-section" class="underline" onclick={on_rules_link}>{ t("entry.rules_link") }</a>
                    {"."}
                </label>
            </div>
            if let Some(err) = rules_error {
                <p id={error_id(Field::AcceptRules)} class="text-red-600 text-sm mb-2" role="alert">{ err }</p>
            }
            <div class="mb-3 flex items-start gap-2">
                <input
                    id={Field::AcceptPrivacy.input_id()}
                    type="checkbox"
                    checked={data.accept_privacy}
                    disabled={busy}
                    onchange={toggle(EntryForm::set_accept_privacy)}
                />
                <label for={Field::AcceptPrivacy.input_id()} class="text-xs">{ p.legal.privacy_consent_text.clone() }</label>
            </div>
            if let Some(err) = privacy_error {
                <p id={error_id(Field::AcceptPrivacy)} class="text-red-600 text-sm mb-2" role="alert">{ err }</p>
            }

            <p class="text-xs text-gray-600 mb-4">{"* "}{ t("entry.required_note") }</p>
            <button
                type="submit"
                class="w-full bg-[#011e5b] text-white font-bold uppercase rounded p-3 disabled:opacity-50"
                disabled={!form.can_submit()}
            >
                { if busy { t("entry.submitting") } else { t("entry.submit") } }
            </button>
        </form>
    }
}
