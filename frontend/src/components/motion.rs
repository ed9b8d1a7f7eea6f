// Animated container: enter transition on mount plus optional hover scale.
// Buttons get the same hover scale plus a press scale.

use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Enter {
    #[default]
    Fade,
    SlideUp,
    Still,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Hover {
    #[default]
    None,
    Grow,
    Pop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Press {
    #[default]
    None,
    Soft,
    Firm,
}

fn hover_class(hover: Hover) -> Option<&'static str> {
    match hover {
        Hover::None => None,
        Hover::Grow => Some("hover:scale-105"),
        Hover::Pop => Some("hover:scale-110"),
    }
}

fn press_class(press: Press) -> Option<&'static str> {
    match press {
        Press::None => None,
        Press::Soft => Some("active:scale-95"),
        Press::Firm => Some("active:scale-90"),
    }
}

/// Classes for a button that scales on hover and on press.
pub fn button_motion(hover: Hover, press: Press) -> Classes {
    classes!("transition", "transform", hover_class(hover), press_class(press))
}

pub fn motion_classes(enter: Enter, hover: Hover, entered: bool) -> Classes {
    let mut classes = classes!("transition", "duration-300", "ease-out", "transform");

    match (enter, entered) {
        (Enter::Still, _) => {}
        (Enter::Fade, true) => classes.push("opacity-100"),
        (Enter::Fade, false) => classes.push("opacity-0"),
        (Enter::SlideUp, true) => classes.push(classes!("opacity-100", "translate-y-0")),
        (Enter::SlideUp, false) => classes.push(classes!("opacity-0", "translate-y-5")),
    }

    classes.push(hover_class(hover));
    classes
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub enter: Enter,
    #[prop_or_default]
    pub hover: Hover,
}

#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let entered = use_state(|| false);

    // Flip after the first paint so the transition runs.
    {
        let entered = entered.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(16, move || entered.set(true));
            move || drop(timeout)
        });
    }

    html! {
        <div class={classes!(motion_classes(props.enter, props.hover, *entered), props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}
