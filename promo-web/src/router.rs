use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    AgeGate,
    #[at("/home")]
    Home,
    #[at("/sweepstakes/:id")]
    Sweepstakes { id: u32 },
    #[at("/faq")]
    Faq,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Catalog and entry pages are only shown after the age gate.
    #[must_use]
    pub const fn requires_verification(&self) -> bool {
        matches!(self, Self::Home | Self::Sweepstakes { .. })
    }

    /// Promotion id carried by the route, if any.
    #[must_use]
    pub const fn promotion_id(&self) -> Option<u32> {
        match self {
            Self::Sweepstakes { id } => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn paths_round_trip() {
        assert_eq!(Route::Sweepstakes { id: 4 }.to_path(), "/sweepstakes/4");
        assert_eq!(
            Route::recognize("/sweepstakes/11"),
            Some(Route::Sweepstakes { id: 11 })
        );
        assert_eq!(Route::recognize("/home"), Some(Route::Home));
        assert_eq!(Route::recognize("/"), Some(Route::AgeGate));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/sweepstakes/abc"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }

    #[test]
    fn gated_routes() {
        assert!(Route::Home.requires_verification());
        assert!(Route::Sweepstakes { id: 1 }.requires_verification());
        assert!(!Route::Faq.requires_verification());
        assert!(!Route::AgeGate.requires_verification());
        assert_eq!(Route::Sweepstakes { id: 9 }.promotion_id(), Some(9));
    }
}
