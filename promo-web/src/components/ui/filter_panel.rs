use crate::i18n::t;
use promo_core::{Brand, BrandOption, FilterState, SortOption, StateOption};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub filters: FilterState,
    pub brand_options: Vec<BrandOption>,
    pub state_options: Vec<StateOption>,
    pub reset_disabled: bool,
    pub on_brand: Callback<Option<Brand>>,
    /// Emits the selected state's filter value, or `None` for "any".
    pub on_state: Callback<Option<String>>,
    pub on_sort: Callback<Option<SortOption>>,
    pub on_reset: Callback<()>,
}

fn select_value(e: &Event) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlSelectElement>()
        .map(|sel| sel.value())
}

/// Brand, state and sort dropdowns. Options that would match nothing stay
/// listed but disabled.
#[function_component(FilterPanel)]
pub fn filter_panel(p: &Props) -> Html {
    let on_brand = {
        let cb = p.on_brand.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                cb.emit(Brand::from_value(&value));
            }
        })
    };
    let on_state = {
        let cb = p.on_state.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                cb.emit(Some(value).filter(|v| !v.is_empty()));
            }
        })
    };
    let on_sort = {
        let cb = p.on_sort.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                cb.emit(SortOption::from_value(&value));
            }
        })
    };
    let on_reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <aside class="filter-panel w-full md:w-64 space-y-4" aria-label={t("filter.title")}>
            <h2 class="text-lg font-bold uppercase">{ t("filter.title") }</h2>
            <div>
                <label for="filter-brand" class="block text-sm mb-1">{ t("filter.brand") }</label>
                <select id="filter-brand" class="w-full border rounded p-2" onchange={on_brand}>
                    <option value="" selected={p.filters.brand.is_none()}>{ t("filter.choose") }</option>
                    { for p.brand_options.iter().map(|opt| html! {
                        <option
                            value={opt.value.value()}
                            disabled={opt.is_disabled()}
                            selected={p.filters.brand == Some(opt.value)}
                        >
                            { opt.label.clone() }
                        </option>
                    }) }
                </select>
            </div>
            <div>
                <label for="filter-state" class="block text-sm mb-1">{ t("filter.state") }</label>
                <select id="filter-state" class="w-full border rounded p-2" onchange={on_state}>
                    <option value="" selected={p.filters.state.is_none()}>{ t("filter.choose") }</option>
                    { for p.state_options.iter().map(|opt| html! {
                        <option
                            value={opt.value}
                            disabled={opt.is_disabled()}
                            selected={p.filters.state == Some(opt.value)}
                        >
                            { opt.label.clone() }
                        </option>
                    }) }
                </select>
            </div>
            <div>
                <label for="filter-sort" class="block text-sm mb-1">{ t("filter.sort") }</label>
                <select id="filter-sort" class="w-full border rounded p-2" onchange={on_sort}>
                    <option value="" selected={p.filters.sort.is_none()}>{ t("filter.sort_placeholder") }</option>
                    { for SortOption::ALL.iter().map(|sort| html! {
                        <option value={sort.value()} selected={p.filters.sort == Some(*sort)}>
                            { t(&format!("sort.{}", sort.value())) }
                        </option>
                    }) }
                </select>
            </div>
            <button
                type="button"
                class="w-full bg-[#011e5b] text-white rounded p-2 disabled:opacity-50"
                disabled={p.reset_disabled}
                onclick={on_reset}
            >
                { t("filter.reset") }
            </button>
        </aside>
    }
}
