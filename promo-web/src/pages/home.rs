use crate::a11y;
use crate::components::ui::filter_panel::FilterPanel;
use crate::components::ui::promo_grid::PromoGrid;
use crate::config;
use crate::i18n::{t, tr};
use promo_core::{Brand, Catalog, CatalogView, Promotion, SortOption};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

enum CatalogAction {
    Brand(Option<Brand>),
    State(Option<String>),
    Sort(Option<SortOption>),
    LoadMore,
    Reset,
}

#[derive(Clone, PartialEq)]
struct CatalogState(CatalogView);

impl Reducible for CatalogState {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut view = self.0.clone();
        match action {
            CatalogAction::Brand(brand) => view.set_brand(brand),
            CatalogAction::State(state) => view.set_state(state.as_deref()),
            CatalogAction::Sort(sort) => view.set_sort(sort),
            CatalogAction::LoadMore => view.load_more(),
            CatalogAction::Reset => view.reset(),
        }
        Rc::new(Self(view))
    }
}

fn dispatcher<T: 'static>(
    state: &UseReducerHandle<CatalogState>,
    make: fn(T) -> CatalogAction,
) -> Callback<T> {
    let state = state.clone();
    Callback::from(move |value| state.dispatch(make(value)))
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_enter: Callback<u32>,
    #[prop_or_else(config::catalog)]
    pub catalog: Catalog,
    pub year: i32,
}

/// Promotions catalog: season banner, filter sidebar and the paged grid.
#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let catalog = p.catalog.clone();
    let state = use_reducer(move || CatalogState(CatalogView::new(catalog)));
    let on_reset = {
        let state = state.clone();
        Callback::from(move |()| {
            state.dispatch(CatalogAction::Reset);
            a11y::announce(&t("filter.reset"));
        })
    };
    let on_load_more = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(CatalogAction::LoadMore))
    };

    let view = &state.0;
    let visible: Vec<Promotion> = view.visible().into_iter().cloned().collect();
    let year = p.year.to_string();
    let mut args = BTreeMap::new();
    args.insert("year", year.as_str());

    html! {
        <main id="main" class="home max-w-7xl mx-auto px-4 py-10">
            <div class="text-center mb-10">
                <p class="text-xl font-bold text-[#0063aa]">{ tr("home.season", Some(&args)) }</p>
                <h1 class="text-4xl font-extrabold uppercase text-[#011e5b]">{ t("home.title") }</h1>
                <p class="text-xl font-bold uppercase text-[#ffb500]">{ t("home.good_luck") }</p>
            </div>
            <div class="flex flex-col md:flex-row gap-8">
                <FilterPanel
                    filters={view.filters().clone()}
                    brand_options={view.brand_options()}
                    state_options={view.state_options()}
                    reset_disabled={view.is_reset_disabled()}
                    on_brand={dispatcher(&state, CatalogAction::Brand)}
                    on_state={dispatcher(&state, CatalogAction::State)}
                    on_sort={dispatcher(&state, CatalogAction::Sort)}
                    on_reset={on_reset.clone()}
                />
                <PromoGrid
                    promotions={visible}
                    remaining={view.remaining()}
                    on_enter={p.on_enter.clone()}
                    on_load_more={on_load_more}
                    on_reset={on_reset}
                />
            </div>
        </main>
    }
}
