use super::{earth_view::EarthView, hero_overlay::HeroOverlay};
use crate::config::ViewerConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: ViewerConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <section style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#05070d;">
            <EarthView config={props.config.clone()} />
            <HeroOverlay title="StellarScope" />
        </section>
    }
}
