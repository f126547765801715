use crate::a11y;
use crate::dom;
use crate::i18n::t;
use crate::storage::BrowserStore;
use promo_core::AgeGate;
use yew::prelude::*;

const MONTH_ID: &str = "age-month";
const DAY_ID: &str = "age-day";
const YEAR_ID: &str = "age-year";
const ERROR_ID: &str = "age-error";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Fired once a birth date passes every check.
    pub on_verified: Callback<()>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Part {
    Month,
    Day,
    Year,
}

impl Part {
    const fn id(self) -> &'static str {
        match self {
            Self::Month => MONTH_ID,
            Self::Day => DAY_ID,
            Self::Year => YEAR_ID,
        }
    }

    const fn prev(self) -> Option<Self> {
        match self {
            Self::Month => None,
            Self::Day => Some(Self::Month),
            Self::Year => Some(Self::Day),
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Month => Some(Self::Day),
            Self::Day => Some(Self::Year),
            Self::Year => None,
        }
    }

    fn value(self, gate: &AgeGate) -> &str {
        match self {
            Self::Month => gate.month(),
            Self::Day => gate.day(),
            Self::Year => gate.year(),
        }
    }

    fn apply(self, gate: &mut AgeGate, raw: &str) {
        match self {
            Self::Month => gate.set_month(raw),
            Self::Day => gate.set_day(raw),
            Self::Year => gate.set_year(raw),
        }
    }
}

/// Caret sits at the very start (`Some(true)`), the very end (`Some(false)`), or elsewhere.
fn caret_edge(e: &KeyboardEvent) -> Option<bool> {
    let input = e.target_dyn_into::<web_sys::HtmlInputElement>()?;
    let caret = input.selection_start().ok().flatten()?;
    let len = u32::try_from(input.value().chars().count()).ok()?;
    if caret == 0 {
        Some(true)
    } else if caret >= len {
        Some(false)
    } else {
        None
    }
}

/// Full-page birth-date check. Month and day advance focus once two digits
/// are typed; Backspace in an empty box and the arrow keys move between boxes.
#[function_component(AgeGatePage)]
pub fn age_gate_page(p: &Props) -> Html {
    let gate = use_state(AgeGate::new);

    let on_input = |part: Part| {
        let gate = gate.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let mut next = (*gate).clone();
            part.apply(&mut next, &input.value());
            let filled = part.value(&next).len() == 2 && part != Part::Year;
            gate.set(next);
            if filled && let Some(following) = part.next() {
                a11y::focus_id(following.id());
            }
        })
    };
    let on_keydown = |part: Part| {
        let gate = gate.clone();
        Callback::from(move |e: KeyboardEvent| {
            let target = match e.key().as_str() {
                "Backspace" if part.value(&gate).is_empty() => part.prev(),
                "ArrowLeft" if caret_edge(&e) == Some(true) => part.prev(),
                "ArrowRight" if caret_edge(&e) == Some(false) => part.next(),
                _ => None,
            };
            if let Some(target) = target {
                e.prevent_default();
                a11y::focus_id(target.id());
            }
        })
    };
    let on_remember = {
        let gate = gate.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*gate).clone();
                next.set_remember(input.checked());
                gate.set(next);
            }
        })
    };
    let on_submit = {
        let gate = gate.clone();
        let on_verified = p.on_verified.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*gate).clone();
            match next.submit(dom::today()) {
                Ok(_) => {
                    next.remember_in(&BrowserStore::open());
                    gate.set(next);
                    on_verified.emit(());
                }
                Err(err) => {
                    a11y::announce(&err.to_string());
                    gate.set(next);
                }
            }
        })
    };

    let error = gate.error().map(|err| err.to_string());
    let described_by = error.as_ref().map(|_| ERROR_ID);
    let date_box = |part: Part, label: String, placeholder: String, width: &'static str| {
        let max = if part == Part::Year { "4" } else { "2" };
        html! {
            <div class="flex flex-col items-center">
                <label for={part.id()} class="sr-only">{ label }</label>
                <input
                    id={part.id()}
                    type="text"
                    inputmode="numeric"
                    autocomplete="off"
                    maxlength={max}
                    placeholder={placeholder}
                    class={classes!("text-center", "text-2xl", "border-b-2", "border-white", "bg-transparent", "text-white", width)}
                    value={part.value(&gate).to_string()}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={described_by}
                    oninput={on_input(part)}
                    onkeydown={on_keydown(part)}
                />
            </div>
        }
    };

    html! {
        <main id="main" class="age-gate min-h-screen bg-[#011e5b] text-white flex flex-col items-center justify-center p-6">
            <form class="max-w-md w-full text-center" novalidate=true onsubmit={on_submit}>
                <h1 class="text-3xl font-bold uppercase mb-2">{ t("age_gate.title") }</h1>
                <p class="text-sm mb-8">{ t("age_gate.subtitle") }</p>
                <fieldset class="flex justify-center gap-4 mb-4">
                    <legend class="sr-only">{ t("age_gate.title") }</legend>
                    { date_box(Part::Month, t("age_gate.month"), t("age_gate.month_placeholder"), "w-16") }
                    { date_box(Part::Day, t("age_gate.day"), t("age_gate.day_placeholder"), "w-16") }
                    { date_box(Part::Year, t("age_gate.year"), t("age_gate.year_placeholder"), "w-24") }
                </fieldset>
                if let Some(message) = error.clone() {
                    <p id={ERROR_ID} class="text-[#ffb500] text-sm mb-4" role="alert">{ message }</p>
                }
                <label class="flex items-center justify-center gap-2 mb-6 text-sm">
                    <input id="age-remember" type="checkbox" checked={gate.remember()} onchange={on_remember} />
                    { t("age_gate.remember") }
                </label>
                <button type="submit" class="bg-[#ffb500] text-[#011e5b] font-bold uppercase rounded px-10 py-3">
                    { t("age_gate.enter") }
                </button>
                <p class="text-xs mt-6 opacity-80">{ t("age_gate.note") }</p>
            </form>
        </main>
    }
}
