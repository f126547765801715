use crate::components::ui::faq_list::FaqList;
use crate::components::ui::support_form::SupportFormView;
use crate::config;
use yew::prelude::*;

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    let site = config::site();
    html! {
        <main id="main" class="faq px-4 py-10">
            <SupportFormView endpoint={site.endpoints.support.clone()} />
            <FaqList items={site.faq.clone()} />
        </main>
    }
}
