use yew::prelude::*;

/// Shown when no route matches the requested path.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <main id="main" class="not-found max-w-xl mx-auto text-center py-20" aria-live="assertive">
            <h1 class="text-3xl font-bold mb-4">{ crate::i18n::t("not_found.title") }</h1>
            <p class="mb-8">{ crate::i18n::t("not_found.body") }</p>
            <button type="button" class="bg-[#011e5b] text-white rounded px-6 py-2" onclick={go_home}>
                { crate::i18n::t("not_found.home") }
            </button>
        </main>
    }
}
