use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroOverlayProps {
    pub title: AttrValue,
}

// The overlay passes pointer input through to the canvas, except on its buttons.
#[function_component(HeroOverlay)]
pub fn hero_overlay(props: &HeroOverlayProps) -> Html {
    html! {
        <div style="position:relative; z-index:2; display:flex; align-items:center; justify-content:space-between; height:100%; padding:0 64px; pointer-events:none; color:#fff; font-family:sans-serif;">
            <div style="max-width:560px;">
                <div style="display:inline-block; padding:6px 14px; margin-bottom:20px; font-size:13px; color:#93c5fd; background:rgba(30,58,138,0.3); border:1px solid rgba(59,130,246,0.3); border-radius:999px;">
                    {"Interactive 3D Experience"}
                </div>
                <h1 style="margin:0 0 20px 0; font-size:64px; font-weight:700; color:#60a5fa;">{props.title.clone()}</h1>
                <h2 style="margin:0; font-size:22px; font-weight:300; line-height:1.5; color:#d1d5db;">
                    {"An immersive, interactive 3D web experience designed to educate, engage, and awe users by showcasing the planets of our solar system."}
                </h2>
                // Buttons opt back into pointer input; nothing else here does.
                <div style="display:flex; gap:16px; margin-top:36px; pointer-events:auto;">
                    <button style="padding:16px 32px; font-size:18px; font-weight:600; color:#fff; background:linear-gradient(90deg,#2563eb,#9333ea); border:none; border-radius:999px; cursor:pointer;">
                        {"Explore Solar System"}
                    </button>
                    <button style="padding:16px 32px; font-size:18px; font-weight:600; color:#93c5fd; background:transparent; border:2px solid rgba(59,130,246,0.5); border-radius:999px; cursor:pointer;">
                        {"Learn More"}
                    </button>
                </div>
            </div>
            <div style="max-width:280px; padding:24px; background:rgba(0,0,0,0.2); border:1px solid rgba(255,255,255,0.1); border-radius:16px;">
                <h3 style="margin:0 0 14px 0; font-size:17px; color:#93c5fd;">{"Interactive Controls"}</h3>
                <ul style="margin:0; padding:0 0 0 18px; font-size:14px; color:#d1d5db; display:flex; flex-direction:column; gap:8px;">
                    <li>{"Drag Earth around the screen"}</li>
                    <li>{"Scroll to zoom in/out"}</li>
                    <li>{"Earth follows your cursor"}</li>
                </ul>
            </div>
            <div style="position:absolute; bottom:32px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; align-items:center; color:rgba(255,255,255,0.6);">
                <span style="margin-bottom:8px; font-size:14px; font-weight:500;">{"Scroll to explore"}</span>
                <svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                </svg>
            </div>
        </div>
    }
}
