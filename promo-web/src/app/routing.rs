use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// Where to send the visitor instead of `route`, if anywhere. Gated pages
/// bounce to the age gate until verified; a verified visitor skips the gate.
#[must_use]
pub fn redirect_for(route: &Route, verified: bool) -> Option<Route> {
    match route {
        Route::AgeGate if verified => Some(Route::Home),
        r if r.requires_verification() && !verified => Some(Route::AgeGate),
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_verification_guard(
    verified: &UseStateHandle<bool>,
    navigator: Option<Navigator>,
    route: Option<Route>,
) {
    let verified = **verified;
    use_effect_with((verified, route), move |(verified, route)| {
        if let (Some(nav), Some(target)) = (
            navigator.as_ref(),
            route.as_ref().and_then(|r| redirect_for(r, *verified)),
        ) {
            log::debug!("redirecting to {target:?}");
            nav.replace(&target);
        }
    });
}

/// New pages start at the top.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_scroll_reset(route: Option<Route>) {
    use_effect_with(route, |_| crate::dom::scroll_to_top());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unverified_visitors_are_sent_to_the_gate() {
        assert_eq!(redirect_for(&Route::Home, false), Some(Route::AgeGate));
        assert_eq!(
            redirect_for(&Route::Sweepstakes { id: 3 }, false),
            Some(Route::AgeGate)
        );
        assert_eq!(redirect_for(&Route::AgeGate, false), None);
    }

    #[test]
    fn verified_visitors_skip_the_gate() {
        assert_eq!(redirect_for(&Route::AgeGate, true), Some(Route::Home));
        assert_eq!(redirect_for(&Route::Home, true), None);
        assert_eq!(redirect_for(&Route::Sweepstakes { id: 3 }, true), None);
    }

    #[test]
    fn open_pages_never_redirect() {
        for verified in [false, true] {
            assert_eq!(redirect_for(&Route::Faq, verified), None);
            assert_eq!(redirect_for(&Route::NotFound, verified), None);
        }
    }
}
