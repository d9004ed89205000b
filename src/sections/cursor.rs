use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Pointer {
    x: i32,
    y: i32,
}

/// Centers an element of `size` pixels on the pointer.
fn centered(pointer: Pointer, size: i32, scale: f32) -> String {
    format!(
        "transform: translate({}px, {}px) scale({});",
        pointer.x - size / 2,
        pointer.y - size / 2,
        scale
    )
}

/// Dot, trailing ring and glow that follow the mouse.
#[function_component(TechyCursor)]
pub fn techy_cursor() -> Html {
    let pointer = use_state(Pointer::default);
    let pressed = use_state(|| false);

    {
        let pointer = pointer.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            pointer.set(Pointer {
                x: e.client_x(),
                y: e.client_y(),
            });
        });
    }
    {
        let pressed = pressed.clone();
        use_event_with_window("mousedown", move |_: MouseEvent| pressed.set(true));
    }
    {
        let pressed = pressed.clone();
        use_event_with_window("mouseup", move |_: MouseEvent| pressed.set(false));
    }

    let (dot_scale, ring_scale, glow_scale) = if *pressed { (1.5, 1.2, 0.8) } else { (1.0, 1.0, 1.0) };
    let ring_shadow = if *pressed {
        "box-shadow: 0 0 20px rgba(56, 189, 248, 0.3);"
    } else {
        "box-shadow: 0 0 10px rgba(56, 189, 248, 0.2);"
    };
    let glow_opacity = if *pressed { 0.8 } else { 0.4 };

    html! {
        <>
            <div class="cursor-dot" style={centered(*pointer, 8, dot_scale)}></div>
            <div class="cursor-ring" style={format!("{} {}", centered(*pointer, 32, ring_scale), ring_shadow)}></div>
            <div class="cursor-glow" style={format!("{} opacity: {};", centered(*pointer, 48, glow_scale), glow_opacity)}></div>
            <style>
                {r#"
                .cursor-dot, .cursor-ring, .cursor-glow {
                    position: fixed;
                    top: 0;
                    left: 0;
                    border-radius: 50%;
                    pointer-events: none;
                }
                .cursor-dot {
                    width: 8px;
                    height: 8px;
                    background: var(--primary);
                    z-index: 9999;
                    mix-blend-mode: difference;
                    transition: transform 75ms ease-out;
                }
                .cursor-ring {
                    width: 32px;
                    height: 32px;
                    border: 1px solid rgba(56, 189, 248, 0.3);
                    z-index: 9998;
                    transition: all 300ms ease-out;
                }
                .cursor-glow {
                    width: 48px;
                    height: 48px;
                    border: 1px solid rgba(56, 189, 248, 0.1);
                    z-index: 9997;
                    transition: all 500ms ease-out;
                }
                @media (hover: none) {
                    .cursor-dot, .cursor-ring, .cursor-glow { display: none; }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_are_centered_on_pointer() {
        let pointer = Pointer { x: 100, y: 40 };
        assert_eq!(centered(pointer, 32, 1.0), "transform: translate(84px, 24px) scale(1);");
        assert_eq!(centered(pointer, 8, 1.5), "transform: translate(96px, 36px) scale(1.5);");
    }
}
