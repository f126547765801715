use crate::a11y::{dialog_keydown, use_focus_management};
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub close_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog with a backdrop. Focus moves inside while open and returns to the
/// opener on close; Escape and backdrop clicks dismiss it.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();
    use_focus_management(props.open, container_ref.clone());

    if !props.open {
        return Html::default();
    }

    let title_id = format!("modal-title-{}", *modal_id);
    let desc_id = props
        .description
        .as_ref()
        .map(|_| format!("modal-desc-{}", *modal_id));

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = dialog_keydown(container_ref.clone(), props.on_close.clone());
    let close_label = props
        .close_label
        .clone()
        .unwrap_or_else(|| AttrValue::from("Close"));

    html! {
        <div class="modal-backdrop fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4" role="presentation" onclick={on_close.clone()}>
            <div
                class="modal bg-white rounded-lg shadow-xl max-w-2xl w-full max-h-[90vh] overflow-y-auto"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone().unwrap_or_default()}
                onclick={keep_open}
                onkeydown={on_keydown}
                ref={container_ref}
            >
                <div class="modal__header flex items-center justify-between p-6 border-b">
                    <h2 id={title_id} class="text-xl font-semibold">{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label={close_label} onclick={on_close}>
                        {"×"}
                    </button>
                </div>
                { props.description.as_ref().map(|desc| html! {
                    <p id={desc_id.clone().unwrap_or_default()} class="modal__description px-6 pt-4 text-sm">{ desc.clone() }</p>
                }).unwrap_or_default() }
                <div class="modal__body p-6">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
